//! Selection and the in-memory clipboard.
//!
//! The clipboard holds value snapshots: a formula cell is copied as its
//! displayed result, and pasting writes that text as raw input.

use gridlet_engine::engine::{CellRef, Grid};

/// Ordered set of selected coordinates, driven by clicks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    cells: Vec<CellRef>,
}

impl Selection {
    /// Click semantics: an unselected cell becomes the sole selection, a
    /// selected one is removed.
    pub fn toggle(&mut self, cell: CellRef) {
        if self.contains(cell) {
            self.cells.retain(|c| *c != cell);
        } else {
            self.cells.clear();
            self.cells.push(cell);
        }
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        self.cells.contains(&cell)
    }

    /// The anchor for paste and formula insertion.
    pub fn first(&self) -> Option<CellRef> {
        self.cells.first().copied()
    }

    pub fn cells(&self) -> &[CellRef] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

/// A copied cell and the value it held at copy time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipboardEntry {
    pub cell: CellRef,
    pub value: String,
}

/// Cells captured by the last copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Clipboard {
    entries: Vec<ClipboardEntry>,
}

impl Clipboard {
    /// Snapshot the displayed value of every selected cell.
    /// Coordinates outside the grid are skipped.
    pub fn capture(cells: &[CellRef], grid: &Grid) -> Self {
        let entries = cells
            .iter()
            .filter_map(|&cell| {
                grid.display(cell)
                    .map(|value| ClipboardEntry { cell, value })
            })
            .collect();
        Clipboard { entries }
    }

    pub fn entries(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write each entry at `anchor` plus its offset from the first entry.
    ///
    /// Targets outside the grid are dropped. Returns the number of cells
    /// written.
    pub fn paste_into(&self, anchor: CellRef, grid: &mut Grid) -> usize {
        let Some(origin) = self.entries.first().map(|e| e.cell) else {
            return 0;
        };
        let mut written = 0;
        for entry in &self.entries {
            let dr = entry.cell.row as isize - origin.row as isize;
            let dc = entry.cell.col as isize - origin.col as isize;
            let (Some(row), Some(col)) = (
                anchor.row.checked_add_signed(dr),
                anchor.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            if grid.set_input(CellRef::new(row, col), entry.value.clone()) {
                written += 1;
            }
        }
        written
    }
}
