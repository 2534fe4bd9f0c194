//! sheetgrid-core - Sheet model: range resolution, merged regions and structural edits.

pub mod cell;
pub mod error;
pub mod range;
pub mod sheet;

pub use cell::{Cell, CellValue, MergeState};
pub use error::{Result, SheetError};
pub use range::{Dimension, GridRange};
pub use sheet::{ClearOptions, RangeQuery, Sheet, SheetConfig};

pub use sheetgrid_notation::NotationError;
pub use sheetgrid_notation::notation::{Axis, Coordinate, RangeArea};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DIMENSION: u32 = 20;

    fn sheet() -> Sheet {
        Sheet::new(SheetConfig {
            name: "test lib".to_string(),
            ..SheetConfig::with_dimensions(DIMENSION, DIMENSION)
        })
        .unwrap()
    }

    #[test]
    fn test_whole_column_reaches_last_row() {
        let mut sheet = sheet();
        let column = sheet.get_range("A:A").unwrap();
        assert_eq!((column.num_rows(), column.num_columns()), (20, 1));

        let last = sheet.get_cell(&column, 20, 1).unwrap();
        assert_eq!(sheet.display_value(&last).unwrap(), "19-0");
    }

    #[test]
    fn test_edit_session() {
        let mut sheet = sheet();

        let header = sheet.get_range("A1:C1").unwrap();
        sheet
            .set_values(&header, vec![vec!["id".into(), "name".into(), "score".into()]])
            .unwrap();
        sheet.append_row(vec![1.into(), "ada".into(), 9.5.into()]).unwrap();
        sheet.append_row(vec![2.into(), "bob".into(), 7.into()]).unwrap();
        assert_eq!(sheet.last_row(), 3);

        let title = sheet.get_range("A1:C1").unwrap();
        sheet.merge_across(title).unwrap();
        assert_eq!(sheet.merged_ranges(), &[title]);

        // A column inserted through the title widens its merge.
        sheet.insert_columns_after(1, 1).unwrap();
        assert_eq!(sheet.merged_ranges(), &[GridRange::new(1, 1, 1, 4)]);

        let body = sheet.get_range("A2:D3").unwrap();
        assert_eq!(
            sheet.display_values(&body).unwrap(),
            vec![vec!["1", "", "ada", "9.5"], vec!["2", "", "bob", "7"]]
        );

        let target = sheet.get_range("F10").unwrap();
        let moved = sheet.move_to(&body, &target).unwrap();
        assert_eq!(moved.a1_notation().unwrap(), "F10:I11");
        assert_eq!(sheet.last_row(), 11);

        let title = sheet.get_range("A1:D1").unwrap();
        assert_eq!(sheet.move_to(&title, &target), Err(SheetError::IncompatibleMove));
        sheet.break_apart(title).unwrap();
        assert!(sheet.merged_ranges().is_empty());
        assert_eq!(sheet.display_value(&title).unwrap(), "id");
    }

    #[test]
    fn test_every_area_resolves_inside_sheet() {
        let mut sheet = sheet();
        let ranges = sheet.get_ranges("A1, B:B, 3:3, C2:D, 5:2, T20").unwrap();
        assert_eq!(ranges.len(), 6);
        let full = sheet.full_range();
        assert!(ranges.iter().all(|r| full.contains(r)));
    }
}
