//! Rectangular views over a sheet.
//!
//! A [`GridRange`] is only geometry: an origin plus a size, 1-based. It never
//! owns cells; every read or write goes through the [`Sheet`](crate::Sheet)
//! that produced it, which indexes its grid with the range's offsets.

use sheetgrid_notation::notation::decode;

use crate::error::Result;

/// Dimension for row/column operations
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Dimension {
    Row,
    Column,
}

/// A rectangle of cells: `row..row + row_height` by `column..column + column_width`.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct GridRange {
    pub row: u32,
    pub row_height: u32,
    pub column: u32,
    pub column_width: u32,
}

impl GridRange {
    pub fn new(row: u32, row_height: u32, column: u32, column_width: u32) -> GridRange {
        GridRange {
            row,
            row_height,
            column,
            column_width,
        }
    }

    /// A 1x1 range.
    pub fn cell(row: u32, column: u32) -> GridRange {
        GridRange::new(row, 1, column, 1)
    }

    /// Last row covered by the range (inclusive).
    pub fn last_row(&self) -> u32 {
        self.row + self.row_height - 1
    }

    /// Last column covered by the range (inclusive).
    pub fn last_column(&self) -> u32 {
        self.column + self.column_width - 1
    }

    pub fn num_rows(&self) -> u32 {
        self.row_height
    }

    pub fn num_columns(&self) -> u32 {
        self.column_width
    }

    pub fn is_single_cell(&self) -> bool {
        self.row_height == 1 && self.column_width == 1
    }

    /// True when the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &GridRange) -> bool {
        !(other.column > self.last_column()
            || other.last_column() < self.column
            || other.row > self.last_row()
            || other.last_row() < self.row)
    }

    /// True when every cell of `other` lies within `self`.
    pub fn contains(&self, other: &GridRange) -> bool {
        self.column <= other.column
            && self.last_column() >= other.last_column()
            && self.row <= other.row
            && self.last_row() >= other.last_row()
    }

    pub fn contains_cell(&self, row: u32, column: u32) -> bool {
        (self.row..=self.last_row()).contains(&row)
            && (self.column..=self.last_column()).contains(&column)
    }

    /// Extent along a dimension: `(first, count)`.
    pub fn span(&self, dim: Dimension) -> (u32, u32) {
        match dim {
            Dimension::Row => (self.row, self.row_height),
            Dimension::Column => (self.column, self.column_width),
        }
    }

    /// Replace the extent along a dimension.
    pub fn with_span(&self, dim: Dimension, first: u32, count: u32) -> GridRange {
        match dim {
            Dimension::Row => GridRange::new(first, count, self.column, self.column_width),
            Dimension::Column => GridRange::new(self.row, self.row_height, first, count),
        }
    }

    /// One-cell-thick slices: each row for [`Dimension::Row`], each column
    /// for [`Dimension::Column`].
    pub fn lines(&self, dim: Dimension) -> impl Iterator<Item = GridRange> + '_ {
        let (first, count) = self.span(dim);
        (first..first + count).map(move |i| self.with_span(dim, i, 1))
    }

    /// Every `(row, column)` of the range, row-major.
    pub fn positions(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.row..=self.last_row())
            .flat_map(move |r| (self.column..=self.last_column()).map(move |c| (r, c)))
    }

    /// Move the origin, keeping the size. Returns None if the origin would
    /// leave the positive quadrant.
    pub fn offset(&self, row_offset: i64, column_offset: i64) -> Option<GridRange> {
        let row = u32::try_from(i64::from(self.row) + row_offset).ok()?;
        let column = u32::try_from(i64::from(self.column) + column_offset).ok()?;
        if row == 0 || column == 0 {
            return None;
        }
        Some(GridRange::new(row, self.row_height, column, self.column_width))
    }

    /// A1 description of the range, e.g. `B2` or `A1:C4`.
    pub fn a1_notation(&self) -> Result<String> {
        let first = format!("{}{}", decode(self.column)?, self.row);
        if self.is_single_cell() {
            return Ok(first);
        }
        Ok(format!(
            "{}:{}{}",
            first,
            decode(self.last_column())?,
            self.last_row()
        ))
    }
}
