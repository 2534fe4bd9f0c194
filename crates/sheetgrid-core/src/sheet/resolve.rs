//! Resolution of parsed references into concrete ranges.
//!
//! Whole rows and columns expand to the sheet's extent. Spans may be typed in
//! any direction (`B5:A1`, `D:B`, `C:B5`) and resolve to the same rectangle
//! as their forward spelling.

use sheetgrid_notation::NotationError;
use sheetgrid_notation::notation::{Axis, Coordinate, RangeArea, to_coordinates, validate_a1};

use super::Sheet;
use crate::error::{Result, SheetError};
use crate::range::GridRange;

/// What to resolve: either A1 notation or an explicit origin and size.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RangeQuery {
    pub a1: Option<String>,
    pub row: Option<u32>,
    pub column: Option<u32>,
    pub num_rows: Option<u32>,
    pub num_columns: Option<u32>,
}

impl RangeQuery {
    pub fn a1(notation: impl Into<String>) -> Self {
        RangeQuery {
            a1: Some(notation.into()),
            ..RangeQuery::default()
        }
    }

    pub fn at(row: u32, column: u32) -> Self {
        RangeQuery {
            row: Some(row),
            column: Some(column),
            ..RangeQuery::default()
        }
    }

    pub fn with_size(mut self, num_rows: u32, num_columns: u32) -> Self {
        self.num_rows = Some(num_rows);
        self.num_columns = Some(num_columns);
        self
    }

    fn is_empty(&self) -> bool {
        self.a1.is_none()
            && self.row.is_none()
            && self.column.is_none()
            && self.num_rows.is_none()
            && self.num_columns.is_none()
    }
}

impl Sheet {
    /// Resolve a single-area A1 reference.
    pub fn get_range(&mut self, a1: &str) -> Result<GridRange> {
        self.resolve(&RangeQuery::a1(a1))
    }

    /// Resolve every area of an A1 reference.
    pub fn get_ranges(&mut self, a1: &str) -> Result<Vec<GridRange>> {
        self.resolve_all(&RangeQuery::a1(a1))
    }

    /// Range with an explicit origin and size.
    pub fn get_range_at(
        &mut self,
        row: u32,
        column: u32,
        num_rows: u32,
        num_columns: u32,
    ) -> Result<GridRange> {
        self.resolve(&RangeQuery::at(row, column).with_size(num_rows, num_columns))
    }

    /// Resolve a query to exactly one range; multi-area notation is rejected
    /// before any area is resolved.
    pub fn resolve(&mut self, query: &RangeQuery) -> Result<GridRange> {
        let range = match &query.a1 {
            Some(a1) => match parse_areas(a1)?.as_slice() {
                [area] => self.area_to_range(area)?,
                _ => return Err(SheetError::GetRangeMultiAreaMisuse(a1.clone())),
            },
            None => self.explicit_range(query)?,
        };
        self.active = Some(range);
        Ok(range)
    }

    /// Resolve a query to one range per area.
    pub fn resolve_all(&mut self, query: &RangeQuery) -> Result<Vec<GridRange>> {
        let ranges = match &query.a1 {
            Some(a1) => parse_areas(a1)?
                .iter()
                .map(|area| self.area_to_range(area))
                .collect::<Result<Vec<GridRange>>>()?,
            None => vec![self.explicit_range(query)?],
        };
        if let Some(first) = ranges.first() {
            self.active = Some(*first);
        }
        Ok(ranges)
    }

    /// Concrete range for one parsed area.
    pub fn area_to_range(&self, area: &RangeArea) -> Result<GridRange> {
        let range = match area {
            RangeArea::Single(coordinate) => self.single_range(coordinate),
            RangeArea::Span(start, end) => self.span_range(start, end)?,
        };
        self.check_range(&range)?;
        log::trace!("resolved {} to {:?}", area, range);
        Ok(range)
    }

    /// Range given by origin and size; missing parts default to 1.
    fn explicit_range(&self, query: &RangeQuery) -> Result<GridRange> {
        if query.is_empty() {
            return Err(SheetError::IncompatibleRangeSignature);
        }
        let range = GridRange::new(
            query.row.unwrap_or(1),
            query.num_rows.unwrap_or(1),
            query.column.unwrap_or(1),
            query.num_columns.unwrap_or(1),
        );
        self.check_range(&range)?;
        Ok(range)
    }

    fn single_range(&self, coordinate: &Coordinate) -> GridRange {
        let (row, row_height) = match coordinate.row {
            Axis::Bounded(r) => (r, 1),
            Axis::Unbounded => (1, self.num_rows),
        };
        let (column, column_width) = match coordinate.column {
            Axis::Bounded(c) => (c, 1),
            Axis::Unbounded => (1, self.num_columns),
        };
        GridRange::new(row, row_height, column, column_width)
    }

    fn span_range(&self, start: &Coordinate, end: &Coordinate) -> Result<GridRange> {
        let (mut start, mut end) = (*start, *end);

        // A half-open span is anchored on its bounded endpoint, so reorder the
        // two points as a unit; fully bounded spans normalise per axis below.
        let fully_bounded = [start.row, start.column, end.row, end.column]
            .iter()
            .all(|axis| !axis.is_unbounded());
        if !fully_bounded {
            if is_reversed(start.row, end.row) {
                std::mem::swap(&mut start, &mut end);
            }
            if is_reversed(start.column, end.column) {
                std::mem::swap(&mut start, &mut end);
            }
        }

        let (row, row_height) = axis_extent(start.row, end.row, self.num_rows)?;
        let (column, column_width) = axis_extent(start.column, end.column, self.num_columns)?;
        Ok(GridRange::new(row, row_height, column, column_width))
    }
}

/// Parse notation into its areas without resolving them against a sheet.
fn parse_areas(a1: &str) -> Result<Vec<RangeArea>> {
    if a1.trim().is_empty() {
        return Err(SheetError::Notation(NotationError::EmptyInput));
    }
    if !validate_a1(a1) {
        return Err(SheetError::InvalidNotation(a1.to_string()));
    }
    Ok(to_coordinates(a1)?)
}

fn is_reversed(start: Axis, end: Axis) -> bool {
    matches!((start, end), (Axis::Bounded(a), Axis::Bounded(b)) if a > b)
}

/// `(first, count)` covered between two endpoints on one axis.
fn axis_extent(start: Axis, end: Axis, limit: u32) -> Result<(u32, u32)> {
    let past_limit = |n: u32| {
        SheetError::OutOfBounds(format!("position {} is past the sheet limit {}", n, limit))
    };
    match (start, end) {
        (Axis::Bounded(a), Axis::Bounded(b)) => Ok((a.min(b), a.max(b) - a.min(b) + 1)),
        (Axis::Bounded(a), Axis::Unbounded) => {
            if a > limit {
                return Err(past_limit(a));
            }
            Ok((a, limit - a + 1))
        }
        (Axis::Unbounded, Axis::Bounded(b)) => Ok((1, b)),
        (Axis::Unbounded, Axis::Unbounded) => Ok((1, limit)),
    }
}
