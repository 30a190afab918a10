//! Roster view composition.

use log::debug;

use crate::model::Record;
use crate::model::SortDirective;
use crate::model::UpdateHistory;

use super::ColumnSpec;
use super::Page;
use super::PaginationControl;
use super::recency;

/// Per-row context handed to the row renderer alongside the record.
///
/// Carries the resolved display flags; anything else a row needs (course,
/// current user) lives in the renderer itself, opaque to the engine.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    /// Whether time-sensitive activity counts should be shown for this frame.
    pub show_recent: bool,
    /// The resolved columns for this frame.
    pub columns: &'a ColumnSpec,
}

/// Renders one visible record into the embedder's output type.
///
/// Implementations typically capture their surrounding context (course,
/// current user, edit permissions) at construction; the engine passes each
/// record through without interpreting it.
pub trait RowRender {
    /// The rendered row type.
    type Output;

    /// Renders one record.
    fn render(&self, record: &Record, ctx: &RowContext<'_>) -> Self::Output;
}

impl<O, F> RowRender for F
where
    F: Fn(&Record, &RowContext<'_>) -> O,
{
    type Output = O;

    fn render(&self, record: &Record, ctx: &RowContext<'_>) -> O {
        self(record, ctx)
    }
}

/// Everything one rendered frame of the roster needs.
#[derive(Debug, Clone)]
pub struct RosterRender<O> {
    /// The resolved columns for this frame.
    pub columns: ColumnSpec,
    /// One rendered row per visible record.
    pub rows: Vec<O>,
    /// The navigation control for this frame.
    pub pagination: PaginationControl,
    /// Whether time-sensitive activity counts were shown.
    pub show_recent: bool,
}

/// The paginated, sortable roster view.
///
/// The view owns exactly one piece of mutable state, the current 1-based
/// page index. Everything else (recency flag, resolved columns, visible
/// window) is recomputed from the inputs on every [`render`](Self::render)
/// call, so a view can never go stale between frames.
///
/// # Example
///
/// ```
/// use roster_view::{Column, ColumnSpec, Record, RosterView, SortDirective, UpdateHistory};
///
/// let records: Vec<Record> = (1..=30).map(|i| Record::new(i.to_string())).collect();
/// let base = ColumnSpec::new(vec![Column::new("username", "Name").sortable()]);
///
/// let mut view = RosterView::new();
/// let frame = view.render(
///     &records,
///     &UpdateHistory::none(),
///     &base,
///     &SortDirective::unsorted(),
///     &|record: &roster_view::Record, _ctx: &roster_view::RowContext<'_>| record.id().to_string(),
/// );
/// assert_eq!(frame.rows.len(), 25);
/// assert_eq!(frame.pagination.total_pages(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RosterView {
    /// Current 1-based page index.
    page: usize,
    /// Fixed page size for the lifetime of this view.
    per_page: usize,
}

impl RosterView {
    /// Creates a view on page 1 with the default page size of 25.
    pub fn new() -> Self {
        Self {
            page: 1,
            per_page: super::DEFAULT_PAGE_SIZE,
        }
    }

    /// Overrides the page size. Fixed for the lifetime of the view.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        debug_assert!(per_page > 0, "page size must be positive");
        self.per_page = per_page;
        self
    }

    /// Returns the current 1-based page index.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the fixed page size.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Replaces the page index.
    ///
    /// No bounds validation: the pagination control only ever emits in-range
    /// indices, and an index that outlives a shrinking collection renders as
    /// an empty page on the next frame rather than panicking. The index is
    /// deliberately not auto-reset when the collection shrinks.
    pub fn set_page(&mut self, page: usize) {
        debug!("roster page change: {} -> {}", self.page, page);
        self.page = page.max(1);
    }

    /// Renders one frame.
    ///
    /// Recomputes, in order: the collection-level recency flag from
    /// `updates`, the resolved column spec, the visible page window, one row
    /// per visible record via `row_renderer`, and the pagination control.
    pub fn render<R: RowRender>(
        &self,
        records: &[Record],
        updates: &UpdateHistory,
        base_columns: &ColumnSpec,
        sort: &SortDirective,
        row_renderer: &R,
    ) -> RosterRender<R::Output> {
        let show_recent = recency::is_recent(updates.last_update_end());
        let columns = base_columns.resolve(show_recent, sort);
        let window = Page::window(records, self.page, self.per_page);

        let ctx = RowContext {
            show_recent,
            columns: &columns,
        };
        let rows = window
            .items()
            .iter()
            .map(|record| row_renderer.render(record, &ctx))
            .collect();

        let pagination = PaginationControl::new(
            window.total_items(),
            self.per_page,
            window.index(),
            window.total_pages(),
        );

        RosterRender {
            columns,
            rows,
            pagination,
            show_recent,
        }
    }
}

impl Default for RosterView {
    fn default() -> Self {
        Self::new()
    }
}
