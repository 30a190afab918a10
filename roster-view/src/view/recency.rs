//! Recency evaluation for time-sensitive display.

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

/// How long after the last update's end a "recent activity" signal stays
/// meaningful.
const RECENCY_WINDOW_DAYS: i64 = 7;

/// Returns `true` when a last update ending at `last_update_end` is still
/// recent at the current instant.
///
/// Recency has a 7-day rolling window from the *end* of the most recent
/// update: once the collection stops being updated, its activity counts go
/// stale and should no longer be shown. No timestamp means never updated,
/// which is never recent.
///
/// Evaluated at call time on every render; the result is a projection, not a
/// stored flag.
pub fn is_recent(last_update_end: Option<DateTime<Utc>>) -> bool {
    is_recent_at(last_update_end, Utc::now())
}

/// Deterministic variant of [`is_recent`] for a fixed evaluation instant.
///
/// True iff `now` is strictly before `last_update_end + 7 days`.
pub fn is_recent_at(last_update_end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_update_end {
        Some(end) => now < end + Duration::days(RECENCY_WINDOW_DAYS),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_no_update_is_never_recent() {
        assert!(!is_recent_at(None, Utc::now()));
    }

    #[test]
    fn test_within_window() {
        let end = at("2026-03-01T00:00:00Z");
        assert!(is_recent_at(Some(end), at("2026-03-01T00:00:01Z")));
        assert!(is_recent_at(Some(end), at("2026-03-07T23:59:59Z")));
    }

    #[test]
    fn test_boundary_is_stale() {
        // Exactly seven days after the end: the window is exclusive.
        let end = at("2026-03-01T00:00:00Z");
        assert!(!is_recent_at(Some(end), at("2026-03-08T00:00:00Z")));
        assert!(is_recent_at(Some(end), at("2026-03-07T23:59:59Z")));
    }

    #[test]
    fn test_well_past_window() {
        let end = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(!is_recent_at(Some(end), at("2026-03-01T00:00:00Z")));
    }

    #[test]
    fn test_future_end_time_is_recent() {
        // An update still in progress reports a future end; still recent.
        let now = at("2026-03-01T00:00:00Z");
        assert!(is_recent_at(Some(at("2026-03-02T00:00:00Z")), now));
    }
}
