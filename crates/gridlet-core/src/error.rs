//! Error types for Gridlet core.

use gridlet_engine::engine::CellRef;
use thiserror::Error;

/// Errors surfaced by document operations and storage.
#[derive(Error, Debug)]
pub enum GridletError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid spreadsheet data: {0}")]
    Format(String),

    #[error("Not a numeric literal: {0:?}")]
    InvalidLiteral(String),

    #[error("Grid must have at least one row and one column")]
    InvalidDimensions,

    #[error("Cell {0} is outside the grid")]
    OutOfBounds(CellRef),

    #[error("No file path set")]
    NoFilePath,
}

pub type Result<T> = std::result::Result<T, GridletError>;
