//! Text output of resolved references.

use sheetgrid_core::{GridRange, RangeArea, Result};

/// `A1NOTATION row=R column=C rows=H columns=W`
pub fn describe_range(range: &GridRange) -> Result<String> {
    Ok(format!(
        "{} row={} column={} rows={} columns={}",
        range.a1_notation()?,
        range.row,
        range.column,
        range.num_rows(),
        range.num_columns()
    ))
}

/// Legacy numeric form, `-1` standing for a whole row or column.
pub fn describe_area(area: &RangeArea) -> String {
    area.to_string()
}
