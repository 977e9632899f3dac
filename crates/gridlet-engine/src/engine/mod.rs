//! Spreadsheet engine API.
//!
//! - [`Cell`], [`Grid`] - Rectangular cell storage with raw input and computed values
//! - [`CellRef`] - Cell label decoding (A1 notation to row/col indices)
//! - [`CellRange`], [`resolve_range`] - Range expansion in row-major order
//! - [`evaluate`], [`recompute`] - SUM/AVERAGE evaluation and the full-grid pass
//! - [`format_number`] - Format computed values for display

mod cell;
mod cell_ref;
mod eval;
mod format;
mod range;

pub use cell::{Cell, ERROR_MARKER, Evaluation, Grid};
pub use cell_ref::CellRef;
pub use eval::{
    FORMULA_MARKER, Function, RecomputeSummary, evaluate, is_formula, parse_formula, parse_number,
    recompute,
};
pub use format::format_number;
pub use range::{CellRange, resolve_range};
