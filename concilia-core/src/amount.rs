//! Amount normalization: every amount downstream of this module is a plain
//! integer, with "empty cell", "NaN" and "zero" collapsed into 0.

use crate::cell::Cell;

/// Normalize a raw amount cell to an integer.
///
/// Strings are stripped to digits and minus signs, then parsed the way a
/// lenient integer parser would: the longest leading run that forms a number
/// wins ("$1.234.567" → 1234567, "12-34" → 12). Anything that yields no
/// number at all becomes 0. Numeric cells pass through truncated; NaN and
/// infinities become 0.
pub fn normalize_amount(cell: &Cell) -> i64 {
    match cell {
        Cell::Text(s) => {
            let stripped: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '-')
                .collect();
            parse_int_prefix(&stripped).unwrap_or(0)
        }
        Cell::Number(n) => {
            if n.is_finite() {
                *n as i64
            } else {
                0
            }
        }
        Cell::Empty => 0,
    }
}

/// Parse the longest valid integer prefix of `s`, if any.
fn parse_int_prefix(s: &str) -> Option<i64> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_passthrough() {
        assert_eq!(normalize_amount(&Cell::Number(50000.0)), 50000);
        assert_eq!(normalize_amount(&Cell::Number(-1200.0)), -1200);
    }

    #[test]
    fn test_string_with_separators() {
        assert_eq!(normalize_amount(&Cell::from("$1.234.567")), 1234567);
        assert_eq!(normalize_amount(&Cell::from("-1.200")), -1200);
        assert_eq!(normalize_amount(&Cell::from(" 45.000 ")), 45000);
    }

    #[test]
    fn test_blank_and_nan_collapse_to_zero() {
        assert_eq!(normalize_amount(&Cell::Empty), 0);
        assert_eq!(normalize_amount(&Cell::from("")), 0);
        assert_eq!(normalize_amount(&Cell::from("N/A")), 0);
        assert_eq!(normalize_amount(&Cell::Number(f64::NAN)), 0);
    }

    #[test]
    fn test_trailing_junk_after_digits_ignored() {
        // Lenient prefix parse: stops at the first non-digit after the run.
        assert_eq!(normalize_amount(&Cell::from("12-34")), 12);
    }

    #[test]
    fn test_idempotent_over_own_output() {
        for raw in [
            Cell::from("$1.234"),
            Cell::from(""),
            Cell::Number(f64::NAN),
            Cell::Number(987.0),
            Cell::Empty,
        ] {
            let once = normalize_amount(&raw);
            let twice = normalize_amount(&Cell::from(once.to_string().as_str()));
            assert_eq!(once, twice);
        }
    }
}
