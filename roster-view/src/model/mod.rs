//! Data model for roster records and sort state.

mod record;
mod sort;

pub use record::{Record, UpdateEvent, UpdateHistory};
pub use sort::{Direction, SortDirective};
