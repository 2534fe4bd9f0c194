//! Column name codec.
//!
//! Columns are numbered with bijective base-26: there is no zero digit, so
//! `A` is 1, `Z` is 26 and `AA` is 27. Names are at most four letters long,
//! which caps column numbers at 26^4.
//!
//! # Examples
//!
//! ```
//! use sheetgrid_notation::notation::{decode, encode};
//!
//! assert_eq!(encode("AB").unwrap(), 28);
//! assert_eq!(decode(100).unwrap(), "CV");
//! ```

use crate::error::{NotationError, Result};

const CHAR_COUNT: u32 = 26;

/// Largest column number that can be decoded (`YYYZ`).
pub const MAX_COLUMN: u32 = CHAR_COUNT * CHAR_COUNT * CHAR_COUNT * CHAR_COUNT;

/// Encode a column name (e.g. "A", "AB") into its 1-based column number.
///
/// Letters are accepted in either case.
pub fn encode(name: &str) -> Result<u32> {
    if name.is_empty() {
        return Err(NotationError::InvalidArgument("column name is empty"));
    }

    let mut acc: u64 = 0;
    for c in name.bytes() {
        if !c.is_ascii_alphabetic() {
            return Err(NotationError::InvalidArgument(
                "column name must only contain letters A-Z",
            ));
        }
        let digit = u64::from(c.to_ascii_uppercase() - b'A') + 1;
        acc = acc * u64::from(CHAR_COUNT) + digit;
        if acc > u64::from(MAX_COLUMN) {
            return Err(NotationError::OutOfRange {
                value: i64::try_from(acc).unwrap_or(i64::MAX),
                limit: MAX_COLUMN,
            });
        }
    }

    // acc <= MAX_COLUMN, checked inside the loop
    Ok(acc as u32)
}

/// Decode a 1-based column number into its uppercase name.
pub fn decode(index: u32) -> Result<String> {
    if index < 1 || index > MAX_COLUMN {
        return Err(NotationError::OutOfRange {
            value: i64::from(index),
            limit: MAX_COLUMN,
        });
    }

    let mut letters = [0u8; 4];
    let mut offset = letters.len();
    let mut n = index;
    while n > 0 {
        n -= 1;
        offset -= 1;
        letters[offset] = b'A' + (n % CHAR_COUNT) as u8;
        n /= CHAR_COUNT;
    }

    Ok(letters[offset..].iter().map(|&b| b as char).collect())
}
