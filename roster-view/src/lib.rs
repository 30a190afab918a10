//! Client-side engine for a sortable, paginated roster display.
//!
//! The crate derives everything a roster table needs on each render: the
//! visible page window, the resolved column set (with the active sort column
//! marked and stale time-sensitive columns removed), and a recency flag with
//! a 7-day rolling window. Rendering of individual rows is delegated to a
//! caller-supplied [`RowRender`](view::RowRender) implementation; the engine
//! itself holds no state beyond the current page index.

pub mod error;
pub mod locale;
pub mod model;
pub mod view;

pub use error::TimestampError;
pub use locale::{Localizer, MapLocalizer, translate};
pub use model::{Direction, Record, SortDirective, UpdateEvent, UpdateHistory};
pub use view::{
    Column, ColumnSpec, DEFAULT_PAGE_SIZE, EventResult, Page, PageSlot, PaginationControl,
    RosterRender, RosterView, RowContext, RowRender,
};
