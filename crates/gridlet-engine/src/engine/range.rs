//! Range expansion.
//!
//! A range such as `A1:B3` names the inclusive rectangle between two
//! corners. Corners are not normalised: a range whose start lies after its
//! end (on either axis) expands to no cells.

use super::cell_ref::CellRef;
use crate::error::{EvalError, Result};

/// Inclusive rectangular block between two corner references.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    pub fn new(start: CellRef, end: CellRef) -> CellRange {
        CellRange { start, end }
    }

    /// Parse `"A1:B3"`. Surrounding whitespace on each label is ignored.
    pub fn parse(text: &str) -> Result<CellRange> {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() != 2 {
            return Err(EvalError::Parse(format!("Invalid range: {}", text)));
        }
        let start = CellRef::decode(parts[0].trim())?;
        let end = CellRef::decode(parts[1].trim())?;
        Ok(CellRange::new(start, end))
    }

    /// Number of cells covered; zero for reversed ranges.
    pub fn len(&self) -> usize {
        let rows = (self.end.row + 1).saturating_sub(self.start.row);
        let cols = (self.end.col + 1).saturating_sub(self.start.col);
        rows.saturating_mul(cols)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellRef> + '_ {
        // Reversed on either axis: yield nothing without walking the other one.
        let rows = if self.is_empty() {
            1..=0
        } else {
            self.start.row..=self.end.row
        };
        rows.flat_map(move |row| {
            (self.start.col..=self.end.col).map(move |col| CellRef::new(row, col))
        })
    }
}

/// Expand range text into its coordinates, row-major.
pub fn resolve_range(text: &str) -> Result<Vec<CellRef>> {
    let range = CellRange::parse(text)?;
    Ok(range.cells().collect())
}
