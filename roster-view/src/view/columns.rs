//! Column configuration and per-render resolution.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Direction;
use crate::model::SortDirective;

/// One displayable column.
///
/// # Examples
///
/// ```
/// use roster_view::Column;
///
/// let column = Column::new("recent_activity", "Recent Edits")
///     .sortable()
///     .time_sensitive();
/// assert!(column.time_sensitive);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Stable key the sort directive refers to.
    pub key: String,
    /// Column header text (already localized by the embedder).
    pub label: String,
    /// Whether this column responds to header clicks upstream.
    ///
    /// Embedder-facing metadata: header rendering and click handling consult
    /// it before issuing a sort directive. Resolution itself marks whatever
    /// column the directive names, so a directive built by other means (a
    /// restored URL, say) still takes effect.
    pub sortable: bool,
    /// Whether this column's data goes stale once updates stop. Time-sensitive
    /// columns are removed entirely when the collection is no longer recent.
    pub time_sensitive: bool,
    /// The active sort marker, set during resolution.
    pub order: Option<Direction>,
}

impl Column {
    /// Creates a new column.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            time_sensitive: false,
            order: None,
        }
    }

    /// Makes the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Marks the column's data as time-sensitive.
    pub fn time_sensitive(mut self) -> Self {
        self.time_sensitive = true;
        self
    }
}

/// The resolved, per-render set of displayable columns.
///
/// A spec is an ordered, keyed collection. Resolution never mutates the base
/// spec: each render derives a fresh value, so a base shared between several
/// views can never be corrupted by one view's state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    columns: Vec<Column>,
}

impl ColumnSpec {
    /// Creates a spec from columns in display order.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns the columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by key.
    pub fn get(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Returns `true` when a column with `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` when the spec holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Derives the spec for one render.
    ///
    /// When `show_recent` is false, time-sensitive columns are removed
    /// entirely: downstream rendering and sort eligibility treat them as
    /// non-existent. If the sort directive names a surviving column, that
    /// column alone carries an order marker; a directive naming an unknown
    /// (or removed) column is ignored.
    pub fn resolve(&self, show_recent: bool, sort: &SortDirective) -> ColumnSpec {
        let columns = self
            .columns
            .iter()
            .filter(|c| show_recent || !c.time_sensitive)
            .map(|c| {
                let order = match sort.key() {
                    Some(key) if key == c.key => sort.direction(),
                    _ => None,
                };
                Column {
                    order,
                    ..c.clone()
                }
            })
            .collect();
        ColumnSpec { columns }
    }

    /// Returns the column currently marked as sorted, if any.
    pub fn active_sort(&self) -> Option<(&str, Direction)> {
        self.columns
            .iter()
            .find_map(|c| c.order.map(|d| (c.key.as_str(), d)))
    }
}
