//! Persisted spreadsheet state: a JSON object with `grid` and `formats`.
//!
//! ```json
//! {"grid": [["1", "2"], ["=SUM(A1:B1)", ""]], "formats": {}}
//! ```
//!
//! Cells are written as strings. Files saved before evaluation results
//! were kept apart from inputs may hold plain numbers or `null` in the
//! grid; those are read back as their text form and as empty cells.
//! `formats` is carried as-is, whatever JSON it holds.

use crate::error::{GridletError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Opaque formatting metadata, carried through load and save.
pub type Formats = Value;

/// Wholesale snapshot of a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub grid: Vec<Vec<String>>,
    pub formats: Formats,
}

/// Encode state as compact JSON bytes.
pub fn to_json(state: &PersistedState) -> Result<Vec<u8>> {
    serde_json::to_vec(state).map_err(|e| GridletError::Format(e.to_string()))
}

/// Decode and validate JSON bytes.
pub fn from_json(bytes: &[u8]) -> Result<PersistedState> {
    let mut object: Map<String, Value> =
        serde_json::from_slice(bytes).map_err(|e| GridletError::Format(e.to_string()))?;
    let grid = object
        .remove("grid")
        .ok_or_else(|| GridletError::Format("missing field `grid`".to_string()))?;
    let formats = object
        .remove("formats")
        .ok_or_else(|| GridletError::Format("missing field `formats`".to_string()))?;

    let grid: Vec<Vec<Value>> =
        serde_json::from_value(grid).map_err(|e| GridletError::Format(format!("grid: {}", e)))?;
    let grid = grid
        .into_iter()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .into_iter()
                .map(|value| cell_text(value, row))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    validate_shape(&grid)?;
    Ok(PersistedState { grid, formats })
}

fn cell_text(value: Value, row: usize) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(GridletError::Format(format!(
            "row {}: unsupported cell value {}",
            row + 1,
            other
        ))),
    }
}

fn validate_shape(grid: &[Vec<String>]) -> Result<()> {
    let Some(first) = grid.first() else {
        return Err(GridletError::Format("grid has no rows".to_string()));
    };
    if first.is_empty() {
        return Err(GridletError::Format("grid has no columns".to_string()));
    }
    if let Some(row) = grid.iter().position(|r| r.len() != first.len()) {
        return Err(GridletError::Format(format!(
            "row {} has {} cells, expected {}",
            row + 1,
            grid[row].len(),
            first.len()
        )));
    }
    Ok(())
}

/// Write state to a JSON file.
pub fn write_json(path: &Path, state: &PersistedState) -> Result<()> {
    fs::write(path, to_json(state)?)?;
    Ok(())
}

/// Read state from a JSON file.
pub fn parse_json(path: &Path) -> Result<PersistedState> {
    let bytes = fs::read(path)?;
    from_json(&bytes)
}
