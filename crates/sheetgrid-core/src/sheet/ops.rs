//! Structural sheet operations.
//!
//! Cut/paste, row and column insertion/deletion, clearing and appending.
//! Every operation keeps the merged-region list in step with the cells it
//! moves and repaints merge flags afterwards.

use super::Sheet;
use crate::cell::{Cell, CellValue, MergeState};
use crate::error::{Result, SheetError};
use crate::range::{Dimension, GridRange};
use sheetgrid_notation::notation::MAX_COLUMN;

/// What [`Sheet::clear`] removes. With neither flag set the range is broken
/// apart and both contents and formats are reset.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ClearOptions {
    pub contents_only: bool,
    pub formats_only: bool,
}

impl ClearOptions {
    pub fn contents() -> Self {
        ClearOptions {
            contents_only: true,
            formats_only: false,
        }
    }

    pub fn formats() -> Self {
        ClearOptions {
            contents_only: false,
            formats_only: true,
        }
    }
}

impl Sheet {
    /// Cut `source` and paste it at `target`'s top-left cell.
    ///
    /// Values and number formats move; the source is left null with no
    /// format. Returns the range that received the cells. A merged region
    /// overlapping either the source or the destination is
    /// [`SheetError::IncompatibleMove`], so pasted values never land on merge
    /// members.
    pub fn move_to(&mut self, source: &GridRange, target: &GridRange) -> Result<GridRange> {
        self.check_range(source)?;
        let destination = GridRange::new(
            target.row,
            source.row_height,
            target.column,
            source.column_width,
        );
        self.check_range(&destination)?;

        let crosses_merge = self
            .merged
            .iter()
            .any(|region| region.overlaps(source) || region.overlaps(&destination));
        if crosses_merge {
            return Err(SheetError::IncompatibleMove);
        }

        let values = self.values(source)?;
        let formats = self.number_formats(source)?;
        for (row, column) in source.positions() {
            if let Some(cell) = self.cell_mut(row, column) {
                cell.value = None;
                cell.number_format.clear();
            }
        }
        for ((row, column), (value, format)) in destination
            .positions()
            .zip(values.into_iter().flatten().zip(formats.into_iter().flatten()))
        {
            if let Some(cell) = self.cell_mut(row, column) {
                cell.value = value;
                cell.number_format = format;
            }
        }

        self.set_last_row(destination.last_row());
        self.set_last_column(destination.last_column());
        log::debug!("moved {:?} to {:?}", source, destination);
        Ok(destination)
    }

    pub fn insert_rows_before(&mut self, position: u32, how_many: u32) -> Result<()> {
        self.check_position(Dimension::Row, position)?;
        self.insert_dimension(Dimension::Row, position - 1, how_many)
    }

    pub fn insert_rows_after(&mut self, position: u32, how_many: u32) -> Result<()> {
        self.check_position(Dimension::Row, position)?;
        self.insert_dimension(Dimension::Row, position, how_many)
    }

    pub fn insert_columns_before(&mut self, position: u32, how_many: u32) -> Result<()> {
        self.check_position(Dimension::Column, position)?;
        self.insert_dimension(Dimension::Column, position - 1, how_many)
    }

    pub fn insert_columns_after(&mut self, position: u32, how_many: u32) -> Result<()> {
        self.check_position(Dimension::Column, position)?;
        self.insert_dimension(Dimension::Column, position, how_many)
    }

    /// Delete rows and shift the ones below up; blank rows fill the bottom.
    pub fn delete_rows(&mut self, position: u32, how_many: u32) -> Result<()> {
        self.delete_dimension(Dimension::Row, position, how_many)
    }

    /// Delete columns and shift the ones to the right left; blank columns fill
    /// the end.
    pub fn delete_columns(&mut self, position: u32, how_many: u32) -> Result<()> {
        self.delete_dimension(Dimension::Column, position, how_many)
    }

    /// Reset the range's contents to the sheet's seed values and/or clear its
    /// number formats.
    pub fn clear(&mut self, range: &GridRange, options: ClearOptions) -> Result<()> {
        self.check_range(range)?;
        let everything = !options.contents_only && !options.formats_only;
        if everything {
            self.break_apart(*range)?;
        }

        for (row, column) in range.positions() {
            let seed = self.seed_value(row, column);
            if let Some(cell) = self.cell_mut(row, column) {
                if (everything || options.contents_only) && cell.merge != MergeState::Member {
                    cell.value = Some(seed);
                }
                if everything || options.formats_only {
                    cell.number_format.clear();
                }
            }
        }
        Ok(())
    }

    /// Write `values` into the row after the last one with content, growing
    /// the sheet by one row when it is full.
    pub fn append_row(&mut self, values: Vec<CellValue>) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        let width = u32::try_from(values.len())
            .ok()
            .filter(|&w| w <= self.num_columns)
            .ok_or_else(|| {
                SheetError::OutOfBounds(format!(
                    "row of {} values is wider than the sheet ({} columns)",
                    values.len(),
                    self.num_columns
                ))
            })?;

        let row = self.last_row + 1;
        if row > self.num_rows {
            self.insert_dimension(Dimension::Row, self.num_rows, 1)?;
        }
        self.set_values(&GridRange::new(row, 1, 1, width), vec![values])
    }

    fn extent(&self, dim: Dimension) -> u32 {
        match dim {
            Dimension::Row => self.num_rows,
            Dimension::Column => self.num_columns,
        }
    }

    fn check_position(&self, dim: Dimension, position: u32) -> Result<()> {
        if position == 0 || position > self.extent(dim) {
            return Err(SheetError::OutOfBounds(format!(
                "{:?} {} is outside the sheet (1..={})",
                dim,
                position,
                self.extent(dim)
            )));
        }
        Ok(())
    }

    /// Splice `how_many` blank lines in after the first `at` lines.
    fn insert_dimension(&mut self, dim: Dimension, at: u32, how_many: u32) -> Result<()> {
        let limit = match dim {
            Dimension::Row => u32::MAX,
            Dimension::Column => MAX_COLUMN,
        };
        let grown = self
            .extent(dim)
            .checked_add(how_many)
            .filter(|&n| how_many > 0 && n <= limit)
            .ok_or_else(|| {
                SheetError::OutOfBounds(format!(
                    "can not insert {} {:?}(s) into {} (limit {})",
                    how_many,
                    dim,
                    self.extent(dim),
                    limit
                ))
            })?;

        let index = at as usize;
        let count = how_many as usize;
        match dim {
            Dimension::Row => {
                let width = self.num_columns as usize;
                let blank_rows = (0..count).map(|_| vec![Cell::blank(); width]);
                self.cells.splice(index..index, blank_rows);
                self.num_rows = grown;
            }
            Dimension::Column => {
                for row in self.cells.iter_mut() {
                    row.splice(index..index, (0..count).map(|_| Cell::blank()));
                }
                self.num_columns = grown;
            }
        }

        let last = self.last_mut(dim);
        if *last > at {
            *last += how_many;
        }

        for region in self.merged.iter_mut() {
            let (first, count) = region.span(dim);
            if first > at {
                *region = region.with_span(dim, first + how_many, count);
            } else if first + count - 1 > at {
                *region = region.with_span(dim, first, count + how_many);
            }
        }
        self.repaint_merges();

        log::debug!("inserted {} {:?}(s) after {}", how_many, dim, at);
        Ok(())
    }

    fn delete_dimension(&mut self, dim: Dimension, position: u32, how_many: u32) -> Result<()> {
        self.check_position(dim, position)?;
        let end = position
            .checked_add(how_many)
            .map(|n| n - 1)
            .filter(|&end| how_many > 0 && end <= self.extent(dim))
            .ok_or_else(|| {
                SheetError::OutOfBounds(format!(
                    "can not delete {} {:?}(s) from {} of {}",
                    how_many,
                    dim,
                    position,
                    self.extent(dim)
                ))
            })?;

        let start = (position - 1) as usize;
        let count = how_many as usize;
        match dim {
            Dimension::Row => {
                let width = self.num_columns as usize;
                self.cells.drain(start..start + count);
                self.cells
                    .extend((0..count).map(|_| vec![Cell::blank(); width]));
            }
            Dimension::Column => {
                for row in self.cells.iter_mut() {
                    row.drain(start..start + count);
                    row.extend((0..count).map(|_| Cell::blank()));
                }
            }
        }

        let last = self.last_mut(dim);
        if *last > end {
            *last -= how_many;
        } else if *last >= position {
            *last = position - 1;
        }

        self.merged = self
            .merged
            .iter()
            .filter_map(|region| shrink_region(region, dim, position, end))
            .collect();
        self.repaint_merges();

        log::debug!("deleted {} {:?}(s) at {}", how_many, dim, position);
        Ok(())
    }

    fn last_mut(&mut self, dim: Dimension) -> &mut u32 {
        match dim {
            Dimension::Row => &mut self.last_row,
            Dimension::Column => &mut self.last_column,
        }
    }
}

/// Region left after removing lines `position..=end` along `dim`, if any.
fn shrink_region(region: &GridRange, dim: Dimension, position: u32, end: u32) -> Option<GridRange> {
    let (first, count) = region.span(dim);
    let last = first + count - 1;
    let removed = end - position + 1;

    let shrunk = if last < position {
        *region
    } else if first > end {
        region.with_span(dim, first - removed, count)
    } else {
        let overlap = last.min(end) - first.max(position) + 1;
        if overlap == count {
            return None;
        }
        region.with_span(dim, first.min(position), count - overlap)
    };
    (!shrunk.is_single_cell()).then_some(shrunk)
}
