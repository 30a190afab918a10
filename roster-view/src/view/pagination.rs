//! Previous/numbers/next pagination control.

use crate::locale::Localizer;
use crate::locale::translate;

/// Result of offering a click to the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The click issued a page change.
    Consumed,
    /// The click was a no-op (disabled edge or the current page).
    Ignored,
}

/// One numbered slot in the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlot {
    /// 1-based page number.
    pub number: usize,
    /// Whether this slot is the current page (non-interactive).
    pub current: bool,
}

/// The prev/numbers/next navigation strip plus its summary line.
///
/// The control is a pure description of one render: it is rebuilt from the
/// current page window every frame and holds no state of its own. Every
/// click handler synchronously issues exactly one `on_page_change` call or
/// none, and never with an index outside `1..=total_pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
    total_items: usize,
    per_page: usize,
    current_page: usize,
    total_pages: usize,
}

impl PaginationControl {
    /// Creates a control for one rendered frame.
    pub fn new(
        total_items: usize,
        per_page: usize,
        current_page: usize,
        total_pages: usize,
    ) -> Self {
        Self {
            total_items,
            per_page,
            current_page,
            total_pages,
        }
    }

    /// Returns the total number of items across all pages.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns the fixed page size.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the total page count.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Whether the "previous" edge is interactive.
    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" edge is interactive.
    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns one slot per page, the current one marked non-interactive.
    pub fn slots(&self) -> Vec<PageSlot> {
        (1..=self.total_pages)
            .map(|number| PageSlot {
                number,
                current: number == self.current_page,
            })
            .collect()
    }

    /// Offers a click on the "previous" edge.
    ///
    /// A stale current page past the last page (possible after the
    /// collection shrinks) never emits an out-of-range target.
    pub fn click_previous(&self, on_page_change: impl FnOnce(usize)) -> EventResult {
        let target = self.current_page.saturating_sub(1);
        if target >= 1 && target <= self.total_pages {
            on_page_change(target);
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Offers a click on the "next" edge.
    pub fn click_next(&self, on_page_change: impl FnOnce(usize)) -> EventResult {
        if self.next_enabled() {
            on_page_change(self.current_page + 1);
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Offers a click on a numbered slot.
    ///
    /// Clicking the current page, or a number outside `1..=total_pages`, is
    /// ignored.
    pub fn click_page(&self, number: usize, on_page_change: impl FnOnce(usize)) -> EventResult {
        if number >= 1 && number <= self.total_pages && number != self.current_page {
            on_page_change(number);
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Localized label for the "previous" edge.
    pub fn previous_label(&self, localizer: Option<&dyn Localizer>) -> String {
        translate(localizer, &["pagination.previous"], "Previous", &[])
    }

    /// Localized label for the "next" edge.
    pub fn next_label(&self, localizer: Option<&dyn Localizer>) -> String {
        translate(localizer, &["pagination.next"], "Next", &[])
    }

    /// Localized summary line interpolating the current page, total pages,
    /// page size, and total item count.
    pub fn summary(&self, localizer: Option<&dyn Localizer>) -> String {
        translate(
            localizer,
            &["pagination.page_info"],
            "Page %{current} of %{total_pages} (%{count} per page, %{total} total)",
            &[
                ("current", self.current_page.to_string()),
                ("total_pages", self.total_pages.to_string()),
                ("count", self.per_page.to_string()),
                ("total", self.total_items.to_string()),
            ],
        )
    }
}
