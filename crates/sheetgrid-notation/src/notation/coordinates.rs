//! Matrix form to numeric coordinates.
//!
//! Whole rows and whole columns are expressed with [`Axis::Unbounded`] on the
//! axis the selector leaves open: `A:A` is `(Unbounded, 1)` and `3:3` is
//! `(3, Unbounded)`. Callers that still speak the legacy `-1` convention can
//! use [`Coordinate::to_legacy`].
//!
//! | A1          | Coordinates (legacy)      |
//! |-------------|---------------------------|
//! | `A1`        | `[1, 1]`                  |
//! | `A1:B5`     | `[[1, 1], [5, 2]]`        |
//! | `A:A`       | `[-1, 1]`                 |
//! | `1:5`       | `[[1, -1], [5, -1]]`      |
//! | `C:F`       | `[[-1, 3], [-1, 6]]`      |
//! | `A1:C`      | `[[1, 1], [-1, 3]]`       |

use std::fmt;

use super::column::encode;
use super::matrix::{FUSED_SEPARATOR, is_fused, to_matrix};
use crate::error::{NotationError, Result};

/// Sentinel used by the legacy numeric form for "entire row/column".
pub const UNBOUNDED: i64 = -1;

/// One axis of a coordinate.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Axis {
    /// A concrete 1-based row or column.
    Bounded(u32),
    /// The whole extent of the sheet along this axis.
    Unbounded,
}

impl Axis {
    pub fn is_unbounded(self) -> bool {
        matches!(self, Axis::Unbounded)
    }

    pub fn bounded(self) -> Option<u32> {
        match self {
            Axis::Bounded(n) => Some(n),
            Axis::Unbounded => None,
        }
    }

    pub fn to_legacy(self) -> i64 {
        match self {
            Axis::Bounded(n) => i64::from(n),
            Axis::Unbounded => UNBOUNDED,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_legacy())
    }
}

/// A `(row, column)` pair, 1-based.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct Coordinate {
    pub row: Axis,
    pub column: Axis,
}

impl Coordinate {
    pub fn new(row: Axis, column: Axis) -> Coordinate {
        Coordinate { row, column }
    }

    /// A single fully-specified cell.
    pub fn cell(row: u32, column: u32) -> Coordinate {
        Coordinate::new(Axis::Bounded(row), Axis::Bounded(column))
    }

    /// Every column of `row`.
    pub fn whole_row(row: u32) -> Coordinate {
        Coordinate::new(Axis::Bounded(row), Axis::Unbounded)
    }

    /// Every row of `column`.
    pub fn whole_column(column: u32) -> Coordinate {
        Coordinate::new(Axis::Unbounded, Axis::Bounded(column))
    }

    pub fn to_legacy(self) -> (i64, i64) {
        (self.row.to_legacy(), self.column.to_legacy())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.column)
    }
}

/// One comma-separated area of a reference.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum RangeArea {
    Single(Coordinate),
    Span(Coordinate, Coordinate),
}

/// Legacy numeric shape of a [`RangeArea`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LegacyArea {
    Single((i64, i64)),
    Span((i64, i64), (i64, i64)),
}

impl RangeArea {
    pub fn to_legacy(self) -> LegacyArea {
        match self {
            RangeArea::Single(c) => LegacyArea::Single(c.to_legacy()),
            RangeArea::Span(a, b) => LegacyArea::Span(a.to_legacy(), b.to_legacy()),
        }
    }
}

impl fmt::Display for RangeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeArea::Single(c) => write!(f, "{c}"),
            RangeArea::Span(a, b) => write!(f, "[{a},{b}]"),
        }
    }
}

/// Convert A1 notation into one [`RangeArea`] per area.
pub fn to_coordinates(notation: &str) -> Result<Vec<RangeArea>> {
    if notation.trim().is_empty() {
        return Err(NotationError::EmptyInput);
    }

    to_matrix(notation)?
        .iter()
        .map(|area| match area.as_slice() {
            [token] => token_to_coordinate(token).map(RangeArea::Single),
            [first, second] => span_to_area(first, second),
            _ => Err(NotationError::InvalidNotation(notation.to_string())),
        })
        .collect()
}

fn span_to_area(first: &str, second: &str) -> Result<RangeArea> {
    if !is_fused(first) && !is_fused(second) && first == second {
        return token_to_coordinate(first).map(RangeArea::Single);
    }
    Ok(RangeArea::Span(
        token_to_coordinate(first)?,
        token_to_coordinate(second)?,
    ))
}

/// Fused tokens give a cell; bare tokens are a row when numeric and a
/// column otherwise.
fn token_to_coordinate(token: &str) -> Result<Coordinate> {
    match token.split_once(FUSED_SEPARATOR) {
        Some((row, column)) => Ok(Coordinate::new(
            Axis::Bounded(to_int(row)?),
            Axis::Bounded(to_int(column)?),
        )),
        None if is_numeric(token) => Ok(Coordinate::whole_row(to_int(token)?)),
        None => Ok(Coordinate::whole_column(encode(token)?)),
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn to_int(token: &str) -> Result<u32> {
    if is_numeric(token) {
        token
            .parse::<u32>()
            .map_err(|_| NotationError::InvalidNotation(format!("number too large: {token}")))
    } else {
        encode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn legacy(notation: &str) -> Vec<LegacyArea> {
        to_coordinates(notation)
            .unwrap()
            .into_iter()
            .map(RangeArea::to_legacy)
            .collect()
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(legacy("A1"), vec![LegacyArea::Single((1, 1))]);
        assert_eq!(
            to_coordinates("B5").unwrap(),
            vec![RangeArea::Single(Coordinate::cell(5, 2))]
        );
    }

    #[test]
    fn test_whole_column() {
        assert_eq!(legacy("A:A"), vec![LegacyArea::Single((-1, 1))]);
        assert_eq!(
            to_coordinates("A:A").unwrap(),
            vec![RangeArea::Single(Coordinate::whole_column(1))]
        );
    }

    #[test]
    fn test_whole_row() {
        assert_eq!(legacy("8:8"), vec![LegacyArea::Single((8, -1))]);
    }

    #[test]
    fn test_cell_span() {
        assert_eq!(legacy("A1:B5"), vec![LegacyArea::Span((1, 1), (5, 2))]);
    }

    #[test]
    fn test_row_and_column_spans_share_grammar() {
        assert_eq!(legacy("1:5"), vec![LegacyArea::Span((1, -1), (5, -1))]);
        assert_eq!(legacy("A:C"), vec![LegacyArea::Span((-1, 1), (-1, 3))]);
    }

    #[test]
    fn test_repeated_selectors() {
        assert_eq!(
            legacy("A:A,C:C,F:F"),
            vec![
                LegacyArea::Single((-1, 1)),
                LegacyArea::Single((-1, 3)),
                LegacyArea::Single((-1, 6)),
            ]
        );
    }

    #[test]
    fn test_half_open_spans() {
        assert_eq!(legacy("A1:C"), vec![LegacyArea::Span((1, 1), (-1, 3))]);
        assert_eq!(legacy("C:B5"), vec![LegacyArea::Span((-1, 3), (5, 2))]);
        assert_eq!(legacy("B2:7"), vec![LegacyArea::Span((2, 2), (7, -1))]);
    }

    #[test]
    fn test_mixed_areas() {
        assert_eq!(
            legacy("A1,1:1,A1:B5,C:F"),
            vec![
                LegacyArea::Single((1, 1)),
                LegacyArea::Single((1, -1)),
                LegacyArea::Span((1, 1), (5, 2)),
                LegacyArea::Span((-1, 3), (-1, 6)),
            ]
        );
    }

    #[test]
    fn test_bare_single_tokens() {
        assert_eq!(legacy("C"), vec![LegacyArea::Single((-1, 3))]);
        assert_eq!(legacy("4"), vec![LegacyArea::Single((4, -1))]);
    }

    #[test]
    fn test_unfused_sides_are_classified_independently() {
        assert_eq!(legacy("2:B"), vec![LegacyArea::Span((2, -1), (-1, 2))]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_coordinates(""), Err(NotationError::EmptyInput));
    }

    #[test]
    fn test_display() {
        let areas = to_coordinates("A:A,A1:B5").unwrap();
        assert_eq!(areas[0].to_string(), "[-1,1]");
        assert_eq!(areas[1].to_string(), "[[1,1],[5,2]]");
    }
}
