//! Cell records stored in a sheet's backing grid.
//!
//! - [`CellValue`] - The value held by a cell (text, number or boolean)
//! - [`MergeState`] - Whether a cell takes part in a merged region
//! - [`Cell`] - A value plus the number format and merge flag

use serde::Deserialize;
use std::fmt;

/// A non-null cell value.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Merge participation of a single cell.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MergeState {
    #[default]
    None,
    /// Top-left cell of a merged region; keeps the region's value.
    Anchor,
    /// Any other cell of a merged region; its value is always null.
    Member,
}

/// A cell in the sheet grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cell {
    pub value: Option<CellValue>,
    pub number_format: String,
    pub merge: MergeState,
}

impl Cell {
    pub fn new(value: Option<CellValue>) -> Cell {
        Cell {
            value,
            number_format: String::new(),
            merge: MergeState::None,
        }
    }

    pub fn blank() -> Cell {
        Cell::new(None)
    }

    pub fn is_merged(&self) -> bool {
        self.merge != MergeState::None
    }

    /// Display string of the value ("" for null).
    pub fn display_value(&self) -> String {
        self.value.as_ref().map(|v| v.to_string()).unwrap_or_default()
    }
}
