//! Sort state shared between the surrounding UI and the column resolver.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for an active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the conventional lowercase marker (`"asc"` / `"desc"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// The active sort column and direction, as decided by the surrounding UI.
///
/// The engine never reads ambient sort state: the directive is an explicit
/// input to column resolution, so the core stays testable in isolation.
/// The actual reordering of the collection happens upstream; the directive
/// only marks which column header shows as active.
///
/// # Example
///
/// ```
/// use roster_view::SortDirective;
///
/// let sort = SortDirective::desc("character_count");
/// assert_eq!(sort.key(), Some("character_count"));
/// assert!(!sort.ascending());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SortDirective {
    key: Option<String>,
    ascending: bool,
}

impl SortDirective {
    /// No active sort; the collection keeps its insertion order.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// Ascending sort on a column key.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ascending: true,
        }
    }

    /// Descending sort on a column key.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ascending: false,
        }
    }

    /// Returns the active sort column key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Returns `true` when the active sort is ascending.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the direction of the active sort, if any.
    pub fn direction(&self) -> Option<Direction> {
        self.key.as_ref().map(|_| {
            if self.ascending {
                Direction::Asc
            } else {
                Direction::Desc
            }
        })
    }
}
