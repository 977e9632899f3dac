//! Cell reference parsing and formatting.
//!
//! Converts between labels such as "A1" or "c10" and zero-indexed
//! row/column coordinates. Only single-letter columns (A-Z) are
//! recognised: the first character is the column, everything after it
//! must be a 1-based row number.
//!
//! # Examples
//!
//! ```
//! use gridlet_engine::engine::CellRef;
//!
//! let cell = CellRef::decode("C10").unwrap();
//! assert_eq!(cell.row, 9);
//! assert_eq!(cell.col, 2);
//! assert_eq!(cell.to_string(), "C10");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EvalError, Result};

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Decode a label like "B3" into a zero-based coordinate.
    pub fn decode(label: &str) -> Result<CellRef> {
        let mut chars = label.chars();
        let first = chars
            .next()
            .ok_or_else(|| EvalError::Parse("empty cell reference".to_string()))?;
        if !first.is_ascii_alphabetic() {
            return Err(EvalError::Parse(format!(
                "Invalid cell reference: {}",
                label
            )));
        }
        let col = (first.to_ascii_uppercase() as u8 - b'A') as usize;

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EvalError::Parse(format!(
                "Invalid row in cell reference: {}",
                label
            )));
        }
        let row = digits
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| EvalError::Parse(format!("Row out of range: {}", label)))?;

        Ok(CellRef::new(row, col))
    }

    /// Column letter for an index in 0..26.
    pub fn col_letter(col: usize) -> Option<char> {
        (col < 26).then(|| (b'A' + col as u8) as char)
    }
}

impl std::str::FromStr for CellRef {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match CellRef::col_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row + 1),
            None => write!(f, "R{}C{}", self.row + 1, self.col + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_origin() {
        assert_eq!(CellRef::decode("A1").unwrap(), CellRef::new(0, 0));
    }

    #[test]
    fn test_decode_multi_digit_row() {
        assert_eq!(CellRef::decode("C10").unwrap(), CellRef::new(9, 2));
        assert_eq!(CellRef::decode("Z100").unwrap(), CellRef::new(99, 25));
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(CellRef::decode("b2").unwrap(), CellRef::new(1, 1));
    }

    #[test]
    fn test_decode_invalid_inputs() {
        for label in ["", "1A", "A", "A0", "AA1", "A1B", "A-1", " A1", "A 1"] {
            assert!(
                matches!(CellRef::decode(label), Err(EvalError::Parse(_))),
                "{label:?} should not decode"
            );
        }
    }

    #[test]
    fn test_decode_row_overflow() {
        let huge = format!("A{}", "9".repeat(40));
        assert!(CellRef::decode(&huge).is_err());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(CellRef::new(9, 2).to_string(), "C10");
        assert_eq!(CellRef::new(0, 30).to_string(), "R1C31");
    }

    #[test]
    fn test_from_str_matches_decode() {
        let parsed: CellRef = "D4".parse().unwrap();
        assert_eq!(parsed, CellRef::new(3, 3));
    }
}
