//! A1 notation API.
//!
//! Three stages, each usable on its own:
//!
//! - [`encode`], [`decode`] - Column name ⇄ column number (bijective base-26)
//! - [`to_matrix`] - Split a reference into areas of fused `"row,column"` tokens
//! - [`to_coordinates`] - Turn areas into [`RangeArea`] values with
//!   [`Axis::Unbounded`] marking whole rows and columns

mod column;
mod coordinates;
mod matrix;

pub use column::{MAX_COLUMN, decode, encode};
pub use coordinates::{Axis, Coordinate, LegacyArea, RangeArea, UNBOUNDED, to_coordinates};
pub use matrix::{FUSED_SEPARATOR, Matrix, is_fused, to_matrix, validate_a1};
