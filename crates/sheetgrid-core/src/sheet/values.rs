//! Reading and writing cell values and number formats through a range.

use super::Sheet;
use crate::cell::{Cell, CellValue};
use crate::error::{Result, SheetError};
use crate::range::GridRange;

impl Sheet {
    /// Values of the range, row-major; `None` for null cells.
    pub fn values(&self, range: &GridRange) -> Result<Vec<Vec<Option<CellValue>>>> {
        self.read(range, |cell| cell.value.clone())
    }

    /// Values of the range as display strings.
    pub fn display_values(&self, range: &GridRange) -> Result<Vec<Vec<String>>> {
        self.read(range, Cell::display_value)
    }

    /// Display string of the range's top-left cell.
    pub fn display_value(&self, range: &GridRange) -> Result<String> {
        Ok(self.top_left(range)?.display_value())
    }

    pub fn number_formats(&self, range: &GridRange) -> Result<Vec<Vec<String>>> {
        self.read(range, |cell| cell.number_format.clone())
    }

    /// Number format of the range's top-left cell.
    pub fn number_format(&self, range: &GridRange) -> Result<String> {
        Ok(self.top_left(range)?.number_format.clone())
    }

    /// Write one value into every cell of the range.
    pub fn set_value(&mut self, range: &GridRange, value: impl Into<CellValue>) -> Result<()> {
        self.check_range(range)?;
        let value = value.into();
        for (row, column) in range.positions() {
            if let Some(cell) = self.cell_mut(row, column) {
                cell.value = Some(value.clone());
            }
        }
        self.touch(range);
        Ok(())
    }

    /// Write a grid of values; its shape must match the range.
    pub fn set_values(&mut self, range: &GridRange, values: Vec<Vec<CellValue>>) -> Result<()> {
        self.check_range(range)?;
        check_shape(range, &values)?;
        for (r, row) in values.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                // Shape was checked, so the offsets fit in u32.
                if let Some(cell) = self.cell_mut(range.row + r as u32, range.column + c as u32) {
                    cell.value = Some(value);
                }
            }
        }
        self.touch(range);
        Ok(())
    }

    pub fn set_number_format(&mut self, range: &GridRange, format: &str) -> Result<()> {
        self.check_range(range)?;
        for (row, column) in range.positions() {
            if let Some(cell) = self.cell_mut(row, column) {
                cell.number_format = format.to_string();
            }
        }
        Ok(())
    }

    /// Write a grid of number formats; its shape must match the range.
    pub fn set_number_formats(
        &mut self,
        range: &GridRange,
        formats: &[Vec<String>],
    ) -> Result<()> {
        self.check_range(range)?;
        check_shape(range, formats)?;
        for (r, row) in formats.iter().enumerate() {
            for (c, format) in row.iter().enumerate() {
                if let Some(cell) = self.cell_mut(range.row + r as u32, range.column + c as u32) {
                    cell.number_format.clone_from(format);
                }
            }
        }
        Ok(())
    }

    /// The 1x1 range at `(row, column)` relative to the range's origin (1-based).
    pub fn get_cell(&self, range: &GridRange, row: u32, column: u32) -> Result<GridRange> {
        if row == 0 || column == 0 || row > range.row_height || column > range.column_width {
            return Err(SheetError::CellOutOfRange { row, column });
        }
        let cell = GridRange::cell(range.row + row - 1, range.column + column - 1);
        self.check_range(&cell)?;
        Ok(cell)
    }

    /// The range shifted by the given offsets; it must stay inside the sheet.
    pub fn offset(
        &self,
        range: &GridRange,
        row_offset: i64,
        column_offset: i64,
    ) -> Result<GridRange> {
        let moved = range.offset(row_offset, column_offset).ok_or_else(|| {
            SheetError::OutOfBounds(format!(
                "offset ({}, {}) moves {:?} before the first cell",
                row_offset, column_offset, range
            ))
        })?;
        self.check_range(&moved)?;
        Ok(moved)
    }

    /// Values of a rectangle given by origin and size, without touching the
    /// active range.
    pub fn get_sheet_values(
        &self,
        row: u32,
        column: u32,
        num_rows: u32,
        num_columns: u32,
    ) -> Result<Vec<Vec<Option<CellValue>>>> {
        self.values(&GridRange::new(row, num_rows, column, num_columns))
    }

    fn read<T>(&self, range: &GridRange, f: impl Fn(&Cell) -> T) -> Result<Vec<Vec<T>>> {
        self.check_range(range)?;
        let rows = (range.row - 1) as usize..range.last_row() as usize;
        let columns = (range.column - 1) as usize..range.last_column() as usize;
        Ok(self.cells[rows]
            .iter()
            .map(|row| row[columns.clone()].iter().map(&f).collect())
            .collect())
    }

    fn top_left(&self, range: &GridRange) -> Result<&Cell> {
        self.check_range(range)?;
        self.cell(range.row, range.column)
            .ok_or(SheetError::CellOutOfRange {
                row: range.row,
                column: range.column,
            })
    }

    /// Record that the range received content.
    fn touch(&mut self, range: &GridRange) {
        self.set_last_row(range.last_row());
        self.set_last_column(range.last_column());
    }
}

fn check_shape<T>(range: &GridRange, grid: &[Vec<T>]) -> Result<()> {
    let rows = grid.len();
    let columns = grid
        .iter()
        .map(Vec::len)
        .find(|&len| len != range.column_width as usize)
        .unwrap_or(range.column_width as usize);
    if rows != range.row_height as usize || columns != range.column_width as usize {
        return Err(SheetError::DimensionMismatch {
            rows,
            columns,
            expected_rows: range.row_height,
            expected_columns: range.column_width,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::SheetConfig;
    use pretty_assertions::assert_eq;

    fn sheet() -> Sheet {
        Sheet::new(SheetConfig::with_dimensions(20, 20)).unwrap()
    }

    #[test]
    fn test_set_values_and_read_back() {
        let mut sheet = sheet();
        let range = sheet.get_range("B2:C3").unwrap();
        sheet
            .set_values(
                &range,
                vec![
                    vec![1.into(), "two".into()],
                    vec![true.into(), 4.5.into()],
                ],
            )
            .unwrap();

        assert_eq!(
            sheet.display_values(&range).unwrap(),
            vec![vec!["1", "two"], vec!["true", "4.5"]]
        );
        assert_eq!(sheet.display_value(&range).unwrap(), "1");
        assert_eq!(sheet.last_row(), 3);
        assert_eq!(sheet.last_column(), 3);
    }

    #[test]
    fn test_set_values_shape_mismatch() {
        let mut sheet = sheet();
        let range = sheet.get_range("A1:B2").unwrap();
        assert_eq!(
            sheet.set_values(&range, vec![vec![1.into(), 2.into(), 3.into()]]),
            Err(SheetError::DimensionMismatch {
                rows: 1,
                columns: 3,
                expected_rows: 2,
                expected_columns: 2,
            })
        );
        // Ragged input is rejected even when the first row fits.
        assert!(matches!(
            sheet.set_values(&range, vec![vec![1.into(), 2.into()], vec![3.into()]]),
            Err(SheetError::DimensionMismatch { columns: 1, .. })
        ));
        assert_eq!(sheet.display_value(&range).unwrap(), "0-0");
        assert_eq!(sheet.last_row(), 0);
    }

    #[test]
    fn test_set_value_fills_range() {
        let mut sheet = sheet();
        let range = sheet.get_range("C3:D4").unwrap();
        sheet.set_value(&range, 7).unwrap();
        assert_eq!(
            sheet.values(&range).unwrap(),
            vec![vec![Some(CellValue::Number(7.0)); 2]; 2]
        );
        assert_eq!(sheet.last_row(), 4);
    }

    #[test]
    fn test_number_formats() {
        let mut sheet = sheet();
        let range = sheet.get_range("A1:B1").unwrap();
        assert_eq!(sheet.number_format(&range).unwrap(), "");

        sheet.set_number_format(&range, "0.00").unwrap();
        assert_eq!(sheet.number_formats(&range).unwrap(), vec![vec!["0.00", "0.00"]]);

        let formats = vec![vec!["#,##0".to_string(), "0%".to_string()]];
        sheet.set_number_formats(&range, &formats).unwrap();
        assert_eq!(sheet.number_formats(&range).unwrap(), formats);
        assert!(sheet.set_number_formats(&range, &[]).is_err());
    }

    #[test]
    fn test_get_cell() {
        let mut sheet = sheet();
        let range = sheet.get_range("B2:D4").unwrap();
        let cell = sheet.get_cell(&range, 2, 3).unwrap();
        assert_eq!(cell, GridRange::cell(3, 4));
        assert_eq!(sheet.display_value(&cell).unwrap(), "2-3");
        assert_eq!(
            sheet.get_cell(&range, 4, 1),
            Err(SheetError::CellOutOfRange { row: 4, column: 1 })
        );
        assert!(sheet.get_cell(&range, 0, 1).is_err());
    }

    #[test]
    fn test_offset() {
        let mut sheet = sheet();
        let range = sheet.get_range("B2:C3").unwrap();
        assert_eq!(sheet.offset(&range, 2, 1).unwrap(), GridRange::new(4, 2, 3, 2));
        assert!(matches!(sheet.offset(&range, -2, 0), Err(SheetError::OutOfBounds(_))));
        assert!(matches!(sheet.offset(&range, 18, 0), Err(SheetError::OutOfBounds(_))));
    }

    #[test]
    fn test_get_sheet_values() {
        let sheet = sheet();
        let text = |s: &str| Some(CellValue::from(s));
        assert_eq!(
            sheet.get_sheet_values(1, 1, 2, 2).unwrap(),
            vec![vec![text("0-0"), text("0-1")], vec![text("1-0"), text("1-1")]]
        );
        assert_eq!(sheet.active_range(), None);
    }
}
