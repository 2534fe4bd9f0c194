//! A1 notation to matrix form.
//!
//! The matrix form splits a reference into areas (on `,`) and each area into
//! one or two tokens (on `:`). Tokens naming a full cell are fused into a
//! single `"row,column"` string with the column already encoded, so later
//! stages can tell a cell from a bare row/column selector by looking for the
//! separator.
//!
//! | A1               | Matrix                                             |
//! |------------------|----------------------------------------------------|
//! | `A1`             | `[["1,1"]]`                                        |
//! | `A1,B5`          | `[["1,1"], ["5,2"]]`                               |
//! | `A1:B5`          | `[["1,1", "5,2"]]`                                 |
//! | `A:A`            | `[["A", "A"]]`                                     |
//! | `1:5`            | `[["1", "5"]]`                                     |
//! | `A1,1:1,A1:B5,C:F` | `[["1,1"], ["1", "1"], ["1,1", "5,2"], ["C", "F"]]` |

use regex::Regex;
use std::sync::OnceLock;

use super::column::encode;
use crate::error::{NotationError, Result};

/// Separator between the row and the encoded column of a fused token.
pub const FUSED_SEPARATOR: char = ',';

const AREA_SEPARATOR: char = ',';
const RANGE_SEPARATOR: char = ':';

/// One entry per area; each area holds one or two tokens.
pub type Matrix = Vec<Vec<String>>;

/// Convert A1 notation into its matrix form.
pub fn to_matrix(notation: &str) -> Result<Matrix> {
    let compact = strip_whitespace(notation);
    if compact.is_empty() {
        return Err(NotationError::EmptyInput);
    }

    compact
        .split(AREA_SEPARATOR)
        .map(|area| {
            let tokens = area
                .split(RANGE_SEPARATOR)
                .map(|token| convert_token(token, notation))
                .collect::<Result<Vec<String>>>()?;
            if tokens.len() > 2 {
                return Err(NotationError::InvalidNotation(format!(
                    "{notation}: area '{area}' has more than two corners"
                )));
            }
            Ok(tokens)
        })
        .collect()
}

/// Check that a string follows the accepted A1 grammar without converting it.
pub fn validate_a1(notation: &str) -> bool {
    a1_re().is_match(&strip_whitespace(notation))
}

/// Returns true when a matrix token carries both a row and a column.
pub fn is_fused(token: &str) -> bool {
    token.contains(FUSED_SEPARATOR)
}

fn convert_token(token: &str, notation: &str) -> Result<String> {
    let invalid = || NotationError::InvalidNotation(format!("{notation}: bad token '{token}'"));

    let caps = token_re().captures(token).ok_or_else(invalid)?;
    let letters = &caps["letters"];
    let numbers = &caps["numbers"];

    if letters.is_empty() && numbers.is_empty() {
        return Err(invalid());
    }
    if !numbers.is_empty() {
        match numbers.parse::<u32>() {
            Ok(0) | Err(_) => return Err(invalid()),
            Ok(_) => {}
        }
    }

    if numbers.is_empty() {
        return Ok(letters.to_ascii_uppercase());
    }
    if letters.is_empty() {
        return Ok(numbers.to_string());
    }

    Ok(format!("{}{}{}", numbers, FUSED_SEPARATOR, encode(letters)?))
}

fn strip_whitespace(notation: &str) -> String {
    notation.chars().filter(|c| !c.is_whitespace()).collect()
}

fn token_re() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| {
        Regex::new(r"^(?<letters>[A-Za-z]*)(?<numbers>[0-9]*)$")
            .expect("matrix token regex must compile")
    })
}

fn a1_re() -> &'static Regex {
    static A1_RE: OnceLock<Regex> = OnceLock::new();
    A1_RE.get_or_init(|| {
        let token = r"(?:[A-Za-z]+[0-9]*|[0-9]+)";
        let area = format!("{token}(?::{token})?");
        Regex::new(&format!("^{area}(?:,{area})*$")).expect("A1 validation regex must compile")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn m(rows: &[&[&str]]) -> Matrix {
        rows.iter()
            .map(|area| area.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(to_matrix("A1").unwrap(), m(&[&["1,1"]]));
    }

    #[test]
    fn test_multiple_cells() {
        assert_eq!(to_matrix("A1,B5").unwrap(), m(&[&["1,1"], &["5,2"]]));
    }

    #[test]
    fn test_span() {
        assert_eq!(to_matrix("A1:B5").unwrap(), m(&[&["1,1", "5,2"]]));
        assert_eq!(
            to_matrix("A1:B5,A1:B5").unwrap(),
            m(&[&["1,1", "5,2"], &["1,1", "5,2"]])
        );
    }

    #[test]
    fn test_whole_rows_and_columns_stay_unfused() {
        assert_eq!(to_matrix("A:A").unwrap(), m(&[&["A", "A"]]));
        assert_eq!(to_matrix("1:5").unwrap(), m(&[&["1", "5"]]));
        assert_eq!(
            to_matrix("1:1,3:3,8:8").unwrap(),
            m(&[&["1", "1"], &["3", "3"], &["8", "8"]])
        );
    }

    #[test]
    fn test_mixed_areas() {
        assert_eq!(
            to_matrix("A1,1:1,A1:B5,C:F").unwrap(),
            m(&[&["1,1"], &["1", "1"], &["1,1", "5,2"], &["C", "F"]])
        );
    }

    #[test]
    fn test_whitespace_and_case_are_normalised() {
        assert_eq!(to_matrix(" a1 : b5 ").unwrap(), m(&[&["1,1", "5,2"]]));
        assert_eq!(to_matrix("c:f").unwrap(), m(&[&["C", "F"]]));
    }

    #[test]
    fn test_wide_column_is_encoded() {
        assert_eq!(to_matrix("AA10").unwrap(), m(&[&["10,27"]]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_matrix(""), Err(NotationError::EmptyInput));
        assert_eq!(to_matrix("   "), Err(NotationError::EmptyInput));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for bad in ["1A", "A1:", ",A1", "A1:B2:C3", "A0", "A$1", "A1;B2"] {
            assert!(
                matches!(to_matrix(bad), Err(NotationError::InvalidNotation(_))),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_a1() {
        assert!(validate_a1("A1"));
        assert!(validate_a1("A1:B5, C:F, 3:3"));
        assert!(validate_a1("b2"));
        assert!(!validate_a1(""));
        assert!(!validate_a1("A1::B2"));
        assert!(!validate_a1("1A"));
        assert!(!validate_a1("A1:B2:C3"));
    }

    #[test]
    fn test_is_fused() {
        assert!(is_fused("1,1"));
        assert!(!is_fused("A"));
        assert!(!is_fused("5"));
    }
}
