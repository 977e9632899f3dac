//! Error types for formula evaluation.

use thiserror::Error;

use crate::engine::CellRef;

/// Reasons a formula fails to evaluate.
///
/// These never escape the recompute pass: a failing cell displays the
/// error marker and the rest of the grid keeps evaluating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Reference {0} is outside the grid")]
    OutOfBounds(CellRef),
}

pub type Result<T> = std::result::Result<T, EvalError>;
