//! Per-render derivation of the roster display.
//!
//! Everything in this module is recomputed from scratch on each render:
//! [`Page`] windows, [`ColumnSpec`] resolution, and the recency flag are pure
//! projections of the inputs, never cached between frames.

mod columns;
mod page;
mod pagination;
pub mod recency;
mod roster;

pub use columns::{Column, ColumnSpec};
pub use recency::{is_recent, is_recent_at};
pub use page::{DEFAULT_PAGE_SIZE, Page};
pub use pagination::{EventResult, PageSlot, PaginationControl};
pub use roster::{RosterRender, RosterView, RowContext, RowRender};
