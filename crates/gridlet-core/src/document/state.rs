use super::clipboard::{Clipboard, Selection};
use crate::error::{GridletError, Result};
use crate::storage::Formats;
use gridlet_engine::engine::Grid;
use std::path::PathBuf;

/// Grid size used by [`Document::new`].
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;

/// UI-agnostic document state for the spreadsheet.
///
/// All mutation goes through the document's operations; each one runs to
/// completion, including the recompute pass, before returning.
#[derive(Clone, Debug)]
pub struct Document {
    /// The spreadsheet grid, only changed through document operations
    pub(super) grid: Grid,
    /// Formatting metadata, stored and saved but never interpreted
    pub formats: Formats,
    /// Currently selected cells
    pub selection: Selection,
    /// Cells captured by the last copy
    pub clipboard: Clipboard,
    /// Current file path
    pub file_path: Option<PathBuf>,
    /// Whether the grid has been modified since the last save or load
    pub modified: bool,
}

impl Document {
    /// Create a 10x10 document of empty cells.
    pub fn new() -> Self {
        let grid = Grid::new(DEFAULT_ROWS, DEFAULT_COLS).expect("default grid size must be non-zero");
        Self::from_grid(grid)
    }

    /// Create a document of the given size. Both dimensions must be non-zero.
    pub fn with_size(rows: usize, cols: usize) -> Result<Self> {
        let grid = Grid::new(rows, cols).ok_or(GridletError::InvalidDimensions)?;
        Ok(Self::from_grid(grid))
    }

    pub(crate) fn from_grid(grid: Grid) -> Self {
        Document {
            grid,
            formats: Formats::Object(Default::default()),
            selection: Selection::default(),
            clipboard: Clipboard::default(),
            file_path: None,
            modified: false,
        }
    }

    /// Read-only view of the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
