//! Merged regions.
//!
//! A region is registered in `Sheet::merged` and painted onto its cells: the
//! top-left cell becomes the anchor and keeps the value, every other cell is a
//! member with a null value. Regions never partially overlap; a new merge may
//! only swallow existing regions whole.

use super::Sheet;
use crate::cell::MergeState;
use crate::error::{Result, SheetError};
use crate::range::{Dimension, GridRange};

impl Sheet {
    /// Merge the whole range into one region anchored at its top-left cell.
    pub fn merge(&mut self, range: GridRange) -> Result<()> {
        self.check_range(&range)?;
        if range.is_single_cell() {
            return Err(SheetError::SingleCellMerge);
        }

        let superseded = self.superseded_regions(&range)?;
        self.remove_regions(superseded);
        self.flag_region(range);
        self.merged.push(range);

        log::debug!("merged {:?}", range);
        Ok(())
    }

    /// Merge each row of the range into its own region.
    pub fn merge_across(&mut self, range: GridRange) -> Result<()> {
        self.merge_lines(range, Dimension::Row)
    }

    /// Merge each column of the range into its own region.
    pub fn merge_vertically(&mut self, range: GridRange) -> Result<()> {
        self.merge_lines(range, Dimension::Column)
    }

    /// Unmerge every region inside the range.
    ///
    /// Every cell of the range loses its merge flag and, except for the
    /// range's top-left cell, its value.
    pub fn break_apart(&mut self, range: GridRange) -> Result<()> {
        self.check_range(&range)?;
        let superseded = self.superseded_regions(&range)?;
        let count = superseded.len();
        self.remove_regions(superseded);

        for (row, column) in range.positions() {
            if let Some(cell) = self.cell_mut(row, column) {
                cell.merge = MergeState::None;
                if (row, column) != (range.row, range.column) {
                    cell.value = None;
                }
            }
        }

        log::debug!("broke apart {} region(s) in {:?}", count, range);
        Ok(())
    }

    /// Regions that share at least one cell with the range.
    pub fn merged_ranges_in(&self, range: &GridRange) -> Vec<GridRange> {
        self.merged
            .iter()
            .filter(|region| region.overlaps(range))
            .copied()
            .collect()
    }

    /// One region per slice of `range`: [`Dimension::Row`] yields a region per
    /// row, [`Dimension::Column`] a region per column.
    fn merge_lines(&mut self, range: GridRange, line: Dimension) -> Result<()> {
        self.check_range(&range)?;
        if range.is_single_cell() {
            return Err(SheetError::SingleCellMerge);
        }

        for region in self.merged.iter().filter(|region| region.overlaps(&range)) {
            if !range.contains(region) {
                return Err(SheetError::IncompatibleMerge);
            }
            let (_, crossed) = region.span(line);
            if crossed > 1 {
                return Err(match line {
                    Dimension::Row => SheetError::IncompatibleMergeHorizontal,
                    Dimension::Column => SheetError::IncompatibleMergeVertically,
                });
            }
        }

        let superseded = self.superseded_regions(&range)?;
        self.remove_regions(superseded);

        let lines: Vec<GridRange> = range
            .lines(line)
            .filter(|l| !l.is_single_cell())
            .collect();
        for l in &lines {
            self.flag_region(*l);
        }
        log::debug!("merged {:?} into {} line(s)", range, lines.len());
        self.merged.extend(lines);
        Ok(())
    }

    /// Indices of the regions a new merge over `range` replaces.
    fn superseded_regions(&self, range: &GridRange) -> Result<Vec<usize>> {
        let mut indices = Vec::new();
        for (i, region) in self.merged.iter().enumerate() {
            if !region.overlaps(range) {
                continue;
            }
            if !range.contains(region) {
                return Err(SheetError::IncompatibleMerge);
            }
            indices.push(i);
        }
        Ok(indices)
    }

    /// Unregister regions and clear their flags; values are left as they are.
    fn remove_regions(&mut self, mut indices: Vec<usize>) {
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for i in indices {
            let region = self.merged.remove(i);
            for (row, column) in region.positions() {
                if let Some(cell) = self.cell_mut(row, column) {
                    cell.merge = MergeState::None;
                }
            }
        }
    }

    /// Paint a region onto its cells and null every member's value.
    fn flag_region(&mut self, region: GridRange) {
        for (row, column) in region.positions() {
            if let Some(cell) = self.cell_mut(row, column) {
                if (row, column) == (region.row, region.column) {
                    cell.merge = MergeState::Anchor;
                } else {
                    cell.merge = MergeState::Member;
                    cell.value = None;
                }
            }
        }
    }

    /// Recompute every cell's merge flag from the region list.
    pub(crate) fn repaint_merges(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.merge = MergeState::None;
            }
        }
        let regions = self.merged.clone();
        for region in regions {
            for (row, column) in region.positions() {
                if let Some(cell) = self.cell_mut(row, column) {
                    cell.merge = if (row, column) == (region.row, region.column) {
                        MergeState::Anchor
                    } else {
                        MergeState::Member
                    };
                }
            }
        }
    }
}
