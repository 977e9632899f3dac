//! Cell and grid storage.
//!
//! - [`Cell`] - raw input text plus the last computed result for formulas
//! - [`Grid`] - dense, rectangular, row-major matrix of cells

use super::cell_ref::CellRef;
use super::format::format_number;
use crate::error::EvalError;

/// Displayed in place of a formula that failed to evaluate.
pub const ERROR_MARKER: &str = "Error";

/// Outcome of evaluating one formula.
pub type Evaluation = Result<f64, EvalError>;

/// A single grid cell.
///
/// `input` is what the user typed (a literal or `=FUNC(range)`); formulas
/// keep their text and carry their latest result in `value`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub input: String,
    pub value: Option<Evaluation>,
}

impl Cell {
    pub fn new(input: impl Into<String>) -> Cell {
        Cell {
            input: input.into(),
            value: None,
        }
    }

    pub fn is_formula(&self) -> bool {
        super::eval::is_formula(&self.input)
    }

    /// What a renderer shows for this cell.
    pub fn display(&self) -> String {
        match &self.value {
            Some(Ok(n)) => format_number(*n),
            Some(Err(_)) => ERROR_MARKER.to_string(),
            None => self.input.clone(),
        }
    }
}

/// Rectangular matrix of cells. Always at least 1x1 and never ragged.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    cols: usize,
}

impl Grid {
    /// A grid of empty cells. Returns `None` for a zero dimension.
    pub fn new(rows: usize, cols: usize) -> Option<Grid> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Grid {
            cells: vec![vec![Cell::default(); cols]; rows],
            cols,
        })
    }

    /// Build a grid from raw inputs. Returns `None` when `rows` is empty,
    /// has an empty row, or is ragged.
    pub fn from_inputs(rows: Vec<Vec<String>>) -> Option<Grid> {
        let cols = rows.first()?.len();
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let cells = rows
            .into_iter()
            .map(|row| row.into_iter().map(Cell::new).collect())
            .collect();
        Some(Grid { cells, cols })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        cell.row < self.rows() && cell.col < self.cols
    }

    pub fn get(&self, cell: CellRef) -> Option<&Cell> {
        self.cells.get(cell.row)?.get(cell.col)
    }

    /// Raw stored input, never the computed value.
    pub fn raw(&self, cell: CellRef) -> Option<&str> {
        self.get(cell).map(|c| c.input.as_str())
    }

    pub fn display(&self, cell: CellRef) -> Option<String> {
        self.get(cell).map(Cell::display)
    }

    /// Replace a cell's input and drop its stale result.
    /// Returns `false` when the coordinate is outside the grid.
    pub fn set_input(&mut self, cell: CellRef, input: impl Into<String>) -> bool {
        match self.cells.get_mut(cell.row).and_then(|row| row.get_mut(cell.col)) {
            Some(slot) => {
                *slot = Cell::new(input);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_value(&mut self, cell: CellRef, value: Option<Evaluation>) {
        if let Some(slot) = self.cells.get_mut(cell.row).and_then(|row| row.get_mut(cell.col)) {
            slot.value = value;
        }
    }

    /// Append one row of empty cells.
    pub fn push_row(&mut self) {
        self.cells.push(vec![Cell::default(); self.cols]);
    }

    /// Append one empty cell to every row.
    pub fn push_col(&mut self) {
        for row in &mut self.cells {
            row.push(Cell::default());
        }
        self.cols += 1;
    }

    /// Iterate all cells row-major with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (CellRef, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (CellRef::new(r, c), cell))
        })
    }

    /// Snapshot of every raw input, row-major.
    pub fn inputs(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.input.clone()).collect())
            .collect()
    }
}
