//! sheetgrid_notation - A1 reference parsing for sheetgrid.

pub mod error;
pub mod notation;

pub use error::{NotationError, Result};
