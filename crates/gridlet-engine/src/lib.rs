//! gridlet_engine - Cell references, ranges and aggregate formula evaluation.

pub mod engine;
pub mod error;

pub use error::EvalError;
