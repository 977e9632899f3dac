use super::Document;
use crate::error::{GridletError, Result};
use gridlet_engine::engine::{CellRef, FORMULA_MARKER, Function, RecomputeSummary, recompute};
use regex::Regex;
use std::sync::OnceLock;

fn literal_re() -> &'static Regex {
    static LITERAL_RE: OnceLock<Regex> = OnceLock::new();
    LITERAL_RE.get_or_init(|| Regex::new(r"^-?\d*\.?\d*$").expect("literal regex must compile"))
}

/// Whether `input` may be typed into a cell: an optional leading minus,
/// digits, an optional decimal point and digits. The empty string counts.
pub fn is_literal(input: &str) -> bool {
    literal_re().is_match(input)
}

/// Build formula text such as `=SUM(A1:B3)`.
pub fn formula_text(function: &str, range: &str) -> String {
    format!("{}{}({})", FORMULA_MARKER, function, range)
}

impl Document {
    /// Re-evaluate every formula cell from current raw inputs.
    pub fn recompute(&mut self) -> RecomputeSummary {
        recompute(&mut self.grid)
    }

    fn check_bounds(&self, cell: CellRef) -> Result<()> {
        if self.grid.contains(cell) {
            Ok(())
        } else {
            Err(GridletError::OutOfBounds(cell))
        }
    }

    /// Store a literal edit and recompute, reporting why an edit was refused.
    pub fn try_apply_edit(&mut self, cell: CellRef, input: &str) -> Result<()> {
        self.check_bounds(cell)?;
        if !is_literal(input) {
            return Err(GridletError::InvalidLiteral(input.to_string()));
        }
        self.grid.set_input(cell, input);
        self.modified = true;
        tracing::debug!(%cell, input, "literal edit applied");
        self.recompute();
        Ok(())
    }

    /// Store a literal edit and recompute. Anything that is not a numeric
    /// literal (including formulas) leaves the grid untouched.
    pub fn apply_edit(&mut self, cell: CellRef, input: &str) -> bool {
        match self.try_apply_edit(cell, input) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%cell, error = %err, "edit rejected");
                false
            }
        }
    }

    /// Write `=function(range)` into a cell and recompute.
    ///
    /// The function name is not checked here; an unknown name evaluates to
    /// the error marker like any other failing formula.
    pub fn insert_formula(&mut self, cell: CellRef, function: &str, range: &str) -> Result<()> {
        self.check_bounds(cell)?;
        let text = formula_text(function, range);
        tracing::debug!(%cell, formula = %text, "formula inserted");
        self.grid.set_input(cell, text);
        self.modified = true;
        self.recompute();
        Ok(())
    }

    /// Insert a formula into the first selected cell.
    /// Returns `false` when nothing is selected or `range` is blank.
    pub fn insert_formula_at_selection(&mut self, function: Function, range: &str) -> Result<bool> {
        let Some(cell) = self.selection.first() else {
            return Ok(false);
        };
        let range = range.trim();
        if range.is_empty() {
            return Ok(false);
        }
        self.insert_formula(cell, function.name(), range)?;
        Ok(true)
    }

    /// Append a row of empty cells.
    pub fn add_row(&mut self) {
        self.grid.push_row();
        self.modified = true;
        tracing::debug!(rows = self.grid.rows(), "row added");
        self.recompute();
    }

    /// Append an empty cell to every row.
    pub fn add_column(&mut self) {
        self.grid.push_col();
        self.modified = true;
        tracing::debug!(cols = self.grid.cols(), "column added");
        self.recompute();
    }

    /// Toggle a cell in the selection.
    pub fn toggle_selection(&mut self, cell: CellRef) {
        self.selection.toggle(cell);
    }

    /// Snapshot the selected cells into the clipboard.
    pub fn copy(&mut self) {
        self.clipboard = super::Clipboard::capture(self.selection.cells(), &self.grid);
        tracing::debug!(cells = self.clipboard.entries().len(), "cells copied");
    }

    /// Paste at the first selected cell. Does nothing without a selection
    /// or with an empty clipboard. Returns the number of cells written.
    pub fn paste(&mut self) -> usize {
        match self.selection.first() {
            Some(anchor) => self.paste_at(anchor),
            None => 0,
        }
    }

    /// Paste the clipboard with its first entry at `anchor`, then recompute.
    pub fn paste_at(&mut self, anchor: CellRef) -> usize {
        let written = self.clipboard.paste_into(anchor, &mut self.grid);
        if written > 0 {
            self.modified = true;
            tracing::debug!(%anchor, cells = written, "cells pasted");
            self.recompute();
        }
        written
    }
}
