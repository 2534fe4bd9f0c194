//! Error types for sheetgrid core.

use thiserror::Error;

use sheetgrid_notation::NotationError;

/// Errors that can occur while resolving or editing ranges of a sheet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error("Please provide correct A1 notation: {0}")]
    InvalidNotation(String),

    #[error("'{0}' has several areas, please use get_ranges() instead")]
    GetRangeMultiAreaMisuse(String),

    #[error("Please provide A1 notation or at least a row and a column")]
    IncompatibleRangeSignature,

    #[error("Can not merge single cell")]
    SingleCellMerge,

    #[error("You must select all cells in a merged range to merge or unmerge them")]
    IncompatibleMerge,

    #[error("You can't merge horizontally across an existing vertically merged section")]
    IncompatibleMergeHorizontal,

    #[error("You can't merge vertically across an existing horizontally merged section")]
    IncompatibleMergeVertically,

    #[error(
        "You can't perform a cut/paste from a range that partially intersects a merge. \
         Consider unmerging or selecting a larger range that includes the entire merge"
    )]
    IncompatibleMove,

    #[error(
        "Incorrect range dimensions, was {rows}x{columns} but should be {expected_rows}x{expected_columns}"
    )]
    DimensionMismatch {
        rows: usize,
        columns: usize,
        expected_rows: u32,
        expected_columns: u32,
    },

    #[error("Cell ({row}, {column}) is outside of the range")]
    CellOutOfRange { row: u32, column: u32 },

    #[error("Out of bounds: {0}")]
    OutOfBounds(String),
}

pub type Result<T> = std::result::Result<T, SheetError>;
