//! Displayable roster records and their update history.

use std::collections::HashMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::error::TimestampError;

/// One displayable entity in the roster (a course participant, say).
///
/// Records hold their displayable attributes as a `HashMap<String, String>`,
/// keeping the shape opaque to the engine: the engine never interprets field
/// values, it only hands them to the row renderer.
///
/// # Example
///
/// ```
/// use roster_view::Record;
///
/// let record = Record::new("u-1001")
///     .set("username", "Ada")
///     .set("character_count", "5120");
///
/// assert_eq!(record.get("username"), Some("Ada"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The unique identifier of the record.
    id: String,

    /// The displayable attribute values.
    fields: HashMap<String, String>,

    /// Update history for this record.
    #[serde(default)]
    updates: UpdateHistory,
}

impl Record {
    /// Creates a new empty record with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: HashMap::new(),
            updates: UpdateHistory::default(),
        }
    }

    /// Returns the record identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets a displayable attribute, replacing any previous value.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns an attribute value, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns all attribute values.
    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Attaches the record's update history.
    pub fn with_updates(mut self, updates: UpdateHistory) -> Self {
        self.updates = updates;
        self
    }

    /// Returns the record's update history.
    pub fn updates(&self) -> &UpdateHistory {
        &self.updates
    }
}

/// Update history: the most recent update run, if any ever completed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateHistory {
    /// The most recent update event; `None` when never updated.
    pub last_update: Option<UpdateEvent>,
}

impl UpdateHistory {
    /// History with no recorded updates.
    pub fn none() -> Self {
        Self::default()
    }

    /// History whose most recent update ended at `end_time`.
    pub fn ending_at(end_time: DateTime<Utc>) -> Self {
        Self {
            last_update: Some(UpdateEvent { end_time }),
        }
    }

    /// Returns the end timestamp of the most recent update, if any.
    pub fn last_update_end(&self) -> Option<DateTime<Utc>> {
        self.last_update.as_ref().map(|u| u.end_time)
    }
}

/// One completed update run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// When the update run finished.
    pub end_time: DateTime<Utc>,
}

impl UpdateEvent {
    /// Parses an update event from an RFC 3339 timestamp string.
    ///
    /// This is the date-parsing seam: malformed text propagates as a
    /// [`TimestampError`] rather than being silently replaced.
    pub fn from_rfc3339(text: &str) -> Result<Self, TimestampError> {
        let end_time = DateTime::parse_from_rfc3339(text)
            .map_err(|e| TimestampError::parse(text, e))?
            .with_timezone(&Utc);
        Ok(Self { end_time })
    }
}
