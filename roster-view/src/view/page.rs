//! Page windowing over an in-memory collection.

/// Page size used by roster views unless overridden at construction.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// A bounded window into an ordered collection, plus pagination metadata.
///
/// Pages are derived views: they borrow their items from the collection and
/// are recomputed on every render. A `Page` never outlives one frame.
///
/// # Example
///
/// ```
/// let names: Vec<i32> = (1..=30).collect();
/// let page = roster_view::Page::window(&names, 2, 25);
///
/// assert_eq!(page.items(), &[26, 27, 28, 29, 30]);
/// assert_eq!(page.total_pages(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    items: &'a [T],
    index: usize,
    size: usize,
    total_pages: usize,
    total_items: usize,
}

impl<'a, T> Page<'a, T> {
    /// Derives the window for 1-based `page_index` over `collection`.
    ///
    /// Slice bounds are `[(index-1)*size, index*size)` clamped to the
    /// collection: an out-of-range index (for instance a stored index that
    /// outlived a shrinking collection) yields an empty page rather than an
    /// error. An index of 0 is clamped to 1. An empty collection has zero
    /// pages.
    pub fn window(collection: &'a [T], page_index: usize, page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        let index = page_index.max(1);
        let start = (index - 1).saturating_mul(page_size).min(collection.len());
        let end = index.saturating_mul(page_size).min(collection.len());
        Self {
            items: &collection[start..end],
            index,
            size: page_size,
            total_pages: collection.len().div_ceil(page_size),
            total_items: collection.len(),
        }
    }

    /// Returns the visible slice of the collection.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Returns the 1-based page index this window was derived for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the page size the window was derived with.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the total page count, `ceil(collection len / page size)`.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns the total number of items in the underlying collection.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns the number of items in this window.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this window holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the 1-based position of the window's first item in the
    /// collection, or 0 for an empty window.
    pub fn first_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.index - 1) * self.size + 1
        }
    }

    /// Returns the 1-based position of the window's last item in the
    /// collection, or 0 for an empty window.
    pub fn last_position(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            self.first_position() + self.items.len() - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        let items: Vec<u32> = (0..30).collect();
        assert_eq!(Page::window(&items, 1, 25).total_pages(), 2);
        assert_eq!(Page::window(&items, 1, 30).total_pages(), 1);
        assert_eq!(Page::window(&items, 1, 7).total_pages(), 5);
        assert_eq!(Page::<u32>::window(&[], 1, 25).total_pages(), 0);
    }

    #[test]
    fn test_windows_partition_the_collection() {
        // Every item appears on exactly one page.
        for (n, size) in [(30usize, 25usize), (0, 25), (100, 7), (25, 25), (26, 25)] {
            let items: Vec<usize> = (0..n).collect();
            let total = Page::window(&items, 1, size).total_pages();
            assert_eq!(total, n.div_ceil(size));

            let mut seen = Vec::new();
            for index in 1..=total {
                seen.extend_from_slice(Page::window(&items, index, size).items());
            }
            assert_eq!(seen, items);
        }
    }

    #[test]
    fn test_thirty_records_page_size_25() {
        let items: Vec<u32> = (1..=30).collect();

        let first = Page::window(&items, 1, 25);
        assert_eq!(first.len(), 25);
        assert_eq!(first.items()[0], 1);
        assert_eq!(first.items()[24], 25);
        assert_eq!((first.first_position(), first.last_position()), (1, 25));

        let second = Page::window(&items, 2, 25);
        assert_eq!(second.items(), &[26, 27, 28, 29, 30]);
        assert_eq!((second.first_position(), second.last_position()), (26, 30));
    }

    #[test]
    fn test_out_of_range_index_is_empty_not_error() {
        let items: Vec<u32> = (0..10).collect();
        let page = Page::window(&items, 4, 25);
        assert!(page.is_empty());
        assert_eq!(page.index(), 4);
        assert_eq!(page.total_pages(), 1);
        assert_eq!((page.first_position(), page.last_position()), (0, 0));
    }

    #[test]
    fn test_zero_index_clamps_to_one() {
        let items: Vec<u32> = (0..3).collect();
        let page = Page::window(&items, 0, 25);
        assert_eq!(page.index(), 1);
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_empty_collection() {
        let page = Page::<u32>::window(&[], 1, 25);
        assert!(page.is_empty());
        assert_eq!(page.index(), 1);
        assert_eq!(page.total_pages(), 0);
        assert_eq!(page.total_items(), 0);
    }
}
