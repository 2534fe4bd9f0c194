//! Sheet configuration and the cell arena every range reads and writes.

use crate::cell::{Cell, CellValue};
use crate::error::{Result, SheetError};
use crate::range::GridRange;
use serde::Deserialize;
use sheetgrid_notation::notation::MAX_COLUMN;

/// Default number of rows and columns of a new sheet
const DEFAULT_DIMENSION: u32 = 1000;

/// Settings used to build a [`Sheet`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetConfig {
    pub id: u32,
    pub name: String,
    pub num_rows: u32,
    pub num_columns: u32,
    /// Value every cell starts with. When absent each cell is seeded with
    /// `"{row}-{column}"` (0-based).
    pub cell_value: Option<CellValue>,
}

impl SheetConfig {
    pub fn with_dimensions(num_rows: u32, num_columns: u32) -> Self {
        SheetConfig {
            num_rows,
            num_columns,
            ..SheetConfig::default()
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        SheetConfig {
            id: 0,
            name: "Sheet1".to_string(),
            num_rows: DEFAULT_DIMENSION,
            num_columns: DEFAULT_DIMENSION,
            cell_value: None,
        }
    }
}

/// A bounded grid of cells plus the merged regions laid over it.
///
/// The sheet owns every cell; [`GridRange`] values are views into it and all
/// reads and writes go through the sheet.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) num_rows: u32,
    pub(crate) num_columns: u32,
    /// Row-major backing grid, `cells[row - 1][column - 1]`
    pub(crate) cells: Vec<Vec<Cell>>,
    /// Registered merged regions; never partially overlapping
    pub(crate) merged: Vec<GridRange>,
    /// Last row/column written through a range (0 when nothing was written)
    pub(crate) last_row: u32,
    pub(crate) last_column: u32,
    /// Range returned by the most recent resolution
    pub(crate) active: Option<GridRange>,
    /// Configured seed value; `None` seeds each cell with its position
    pub(crate) seed: Option<CellValue>,
}

impl Sheet {
    /// Create a sheet and seed its cells.
    pub fn new(config: SheetConfig) -> Result<Self> {
        if config.num_rows == 0 || config.num_columns == 0 {
            return Err(SheetError::OutOfBounds(format!(
                "sheet dimensions must be positive, got {}x{}",
                config.num_rows, config.num_columns
            )));
        }
        if config.num_columns > MAX_COLUMN {
            return Err(SheetError::OutOfBounds(format!(
                "sheet has {} columns, limit is {}",
                config.num_columns, MAX_COLUMN
            )));
        }

        let cells = (1..=config.num_rows)
            .map(|r| {
                (1..=config.num_columns)
                    .map(|c| Cell::new(Some(initial_value(config.cell_value.as_ref(), r, c))))
                    .collect()
            })
            .collect();

        log::debug!(
            "created sheet '{}' ({}x{})",
            config.name,
            config.num_rows,
            config.num_columns
        );

        Ok(Sheet {
            id: config.id,
            name: config.name,
            num_rows: config.num_rows,
            num_columns: config.num_columns,
            cells,
            merged: Vec::new(),
            last_row: 0,
            last_column: 0,
            active: None,
            seed: config.cell_value,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    pub fn num_columns(&self) -> u32 {
        self.num_columns
    }

    /// The whole sheet as a range.
    pub fn full_range(&self) -> GridRange {
        GridRange::new(1, self.num_rows, 1, self.num_columns)
    }

    /// Position of the last row that received content.
    pub fn last_row(&self) -> u32 {
        self.last_row
    }

    /// Position of the last column that received content.
    pub fn last_column(&self) -> u32 {
        self.last_column
    }

    /// Raise the last-row marker; lower values are ignored and higher ones
    /// are capped at the sheet's row count.
    pub fn set_last_row(&mut self, row: u32) {
        self.last_row = self.last_row.max(row.min(self.num_rows));
    }

    /// Raise the last-column marker; lower values are ignored and higher ones
    /// are capped at the sheet's column count.
    pub fn set_last_column(&mut self, column: u32) {
        self.last_column = self.last_column.max(column.min(self.num_columns));
    }

    /// Merged regions currently registered on the sheet.
    pub fn merged_ranges(&self) -> &[GridRange] {
        &self.merged
    }

    pub fn active_range(&self) -> Option<GridRange> {
        self.active
    }

    pub fn set_active_range(&mut self, range: GridRange) -> Result<GridRange> {
        self.check_range(&range)?;
        self.active = Some(range);
        Ok(range)
    }

    /// Cell at an absolute 1-based position.
    pub fn cell(&self, row: u32, column: u32) -> Option<&Cell> {
        let r = usize::try_from(row.checked_sub(1)?).ok()?;
        let c = usize::try_from(column.checked_sub(1)?).ok()?;
        self.cells.get(r)?.get(c)
    }

    pub(crate) fn cell_mut(&mut self, row: u32, column: u32) -> Option<&mut Cell> {
        let r = usize::try_from(row.checked_sub(1)?).ok()?;
        let c = usize::try_from(column.checked_sub(1)?).ok()?;
        self.cells.get_mut(r)?.get_mut(c)
    }

    /// Value a cell at `(row, column)` holds on a fresh sheet.
    pub(crate) fn seed_value(&self, row: u32, column: u32) -> CellValue {
        initial_value(self.seed.as_ref(), row, column)
    }

    /// Fail unless the range is non-empty and lies inside the sheet.
    pub fn check_range(&self, range: &GridRange) -> Result<()> {
        let fits = range.row >= 1
            && range.column >= 1
            && range.row_height >= 1
            && range.column_width >= 1
            && u64::from(range.row) + u64::from(range.row_height) - 1 <= u64::from(self.num_rows)
            && u64::from(range.column) + u64::from(range.column_width) - 1
                <= u64::from(self.num_columns);
        if fits {
            Ok(())
        } else {
            Err(SheetError::OutOfBounds(format!(
                "range at row {} column {} sized {}x{} does not fit a {}x{} sheet",
                range.row,
                range.column,
                range.row_height,
                range.column_width,
                self.num_rows,
                self.num_columns
            )))
        }
    }
}

fn initial_value(seed: Option<&CellValue>, row: u32, column: u32) -> CellValue {
    match seed {
        Some(value) => value.clone(),
        None => CellValue::Text(format!("{}-{}", row - 1, column - 1)),
    }
}
