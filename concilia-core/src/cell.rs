//! Raw tabular cell values, before any normalization.
//!
//! Spreadsheet extracts hand over a mix of text, numbers and blanks; the
//! normalizers in `amount` and `dates` accept this type so "empty cell",
//! "NaN" and "zero" can be collapsed deliberately instead of by accident.

use serde::{Deserialize, Serialize};

/// One raw cell from a statement, ledger or calendar row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Coerce to the text a spreadsheet would show: integral numbers render
    /// without a decimal point, blanks render empty.
    pub fn text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Cell::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Text(s) => s.is_empty(),
            Cell::Number(_) => false,
            Cell::Empty => true,
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Cell::Empty
        } else {
            Cell::Text(s.to_string())
        }
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renders_integral_number_without_decimals() {
        assert_eq!(Cell::Number(1001.0).text(), "1001");
        assert_eq!(Cell::Number(-250.0).text(), "-250");
    }

    #[test]
    fn test_text_keeps_fractional_number() {
        assert_eq!(Cell::Number(1.5).text(), "1.5");
    }

    #[test]
    fn test_empty_variants() {
        assert!(Cell::Empty.is_empty());
        assert!(Cell::from("").is_empty());
        assert!(!Cell::from("x").is_empty());
        assert_eq!(Cell::Empty.text(), "");
    }
}
