//! Formula recognition and evaluation.
//!
//! A formula is any input starting with `=`. Two aggregate functions are
//! supported, `SUM(range)` and `AVERAGE(range)`, with case-insensitive
//! names. Referenced cells are read by their raw input: a referenced
//! formula contributes its text, which coerces to 0, not its result.

use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

use super::cell::{Evaluation, Grid};
use super::range::CellRange;
use crate::error::{EvalError, Result};

/// Leading character that marks a formula.
pub const FORMULA_MARKER: char = '=';

/// Aggregate functions understood by the evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sum,
    Average,
}

impl Function {
    pub fn name(&self) -> &'static str {
        match self {
            Function::Sum => "SUM",
            Function::Average => "AVERAGE",
        }
    }
}

impl FromStr for Function {
    type Err = EvalError;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "SUM" => Ok(Function::Sum),
            "AVERAGE" => Ok(Function::Average),
            _ => Err(EvalError::UnknownFunction(name.to_string())),
        }
    }
}

pub fn is_formula(text: &str) -> bool {
    text.starts_with(FORMULA_MARKER)
}

fn call_re() -> &'static Regex {
    static CALL_RE: OnceLock<Regex> = OnceLock::new();
    CALL_RE.get_or_init(|| {
        Regex::new(r"^([A-Z][A-Z0-9_.]*)\((.*)\)$").expect("formula call regex must compile")
    })
}

/// Split formula text into its function and range.
pub fn parse_formula(text: &str) -> Result<(Function, CellRange)> {
    let body = text
        .strip_prefix(FORMULA_MARKER)
        .ok_or_else(|| EvalError::Parse(format!("Not a formula: {}", text)))?
        .to_uppercase();
    let caps = call_re()
        .captures(&body)
        .ok_or_else(|| EvalError::Parse(format!("Malformed formula: {}", text)))?;
    let function = caps[1].parse::<Function>()?;
    let range = CellRange::parse(&caps[2])?;
    Ok((function, range))
}

/// Numeric reading of a raw cell: empty or non-numeric input counts as 0.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn sum_range(range: &CellRange, grid: &Grid) -> Result<f64> {
    range.cells().try_fold(0.0, |acc, cell| -> Result<f64> {
        let raw = grid.raw(cell).ok_or(EvalError::OutOfBounds(cell))?;
        Ok(acc + parse_number(raw))
    })
}

/// Evaluate formula text against the grid's raw inputs.
pub fn evaluate(text: &str, grid: &Grid) -> Evaluation {
    let (function, range) = parse_formula(text)?;
    let sum = sum_range(&range, grid)?;
    match function {
        Function::Sum => Ok(sum),
        Function::Average => {
            let count = range.len();
            if count == 0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(sum / count as f64)
        }
    }
}

/// Counts from one recompute pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecomputeSummary {
    pub formulas: usize,
    pub errors: usize,
}

/// Re-evaluate every formula cell in row-major order.
///
/// Each cell is evaluated independently from raw inputs, so one failing
/// formula only marks its own cell.
pub fn recompute(grid: &mut Grid) -> RecomputeSummary {
    let snapshot: &Grid = grid;
    let results: Vec<_> = snapshot
        .iter()
        .filter(|(_, cell)| cell.is_formula())
        .map(|(at, cell)| (at, evaluate(&cell.input, snapshot)))
        .collect();

    let mut summary = RecomputeSummary::default();
    for (at, result) in results {
        summary.formulas += 1;
        if let Err(err) = &result {
            summary.errors += 1;
            tracing::warn!(cell = %at, error = %err, "formula evaluation failed");
        }
        grid.set_value(at, Some(result));
    }
    tracing::debug!(
        formulas = summary.formulas,
        errors = summary.errors,
        "recompute pass finished"
    );
    summary
}
