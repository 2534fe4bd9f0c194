//! Sheet state and range logic.
//!
//! - [`Sheet`] - Owns the cell grid, merged regions and bookkeeping
//! - [`SheetConfig`] - Dimensions, identity and seed value of a new sheet
//! - [`RangeQuery`] - Notation or explicit origin/size to resolve
//! - [`ClearOptions`] - What `Sheet::clear` removes

mod merge;
mod ops;
mod resolve;
mod state;
mod values;

pub use ops::ClearOptions;
pub use resolve::RangeQuery;
pub use state::{Sheet, SheetConfig};
