//! End-to-end flow: pagination clicks drive the view, the view re-renders.

use chrono::{Duration, Utc};
use roster_view::{
    Column, ColumnSpec, Record, RosterView, RowContext, SortDirective, UpdateHistory,
};

fn participants(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            Record::new(format!("u-{i}"))
                .set("username", format!("user{i}"))
                .set("recent_activity", (i % 7).to_string())
        })
        .collect()
}

fn columns() -> ColumnSpec {
    ColumnSpec::new(vec![
        Column::new("username", "Name").sortable(),
        Column::new("recent_activity", "Recent Edits")
            .sortable()
            .time_sensitive(),
    ])
}

fn row_id(record: &Record, _ctx: &RowContext<'_>) -> String {
    record.id().to_string()
}

#[test]
fn test_click_next_advances_and_disables_edge() {
    let records = participants(30);
    let updates = UpdateHistory::ending_at(Utc::now() - Duration::hours(2));
    let sort = SortDirective::unsorted();
    let mut view = RosterView::new();

    let frame = view.render(&records, &updates, &columns(), &sort, &row_id);
    assert_eq!(frame.rows.len(), 25);
    assert_eq!(frame.pagination.total_pages(), 2);
    assert!(!frame.pagination.prev_enabled());

    // Click "next": the control feeds the new index back into the view.
    frame.pagination.click_next(|n| view.set_page(n));
    let frame = view.render(&records, &updates, &columns(), &sort, &row_id);
    assert_eq!(frame.rows, ["u-26", "u-27", "u-28", "u-29", "u-30"]);
    assert!(frame.pagination.prev_enabled());
    assert!(!frame.pagination.next_enabled());

    // A further "next" click is a no-op on the last page.
    let before = view.page();
    frame.pagination.click_next(|n| view.set_page(n));
    assert_eq!(view.page(), before);
}

#[test]
fn test_recency_and_sort_resolve_together() {
    let records = participants(5);
    let stale = UpdateHistory::ending_at(Utc::now() - Duration::days(14));
    let view = RosterView::new();

    // Sorting on the removed time-sensitive column leaves nothing marked.
    let frame = view.render(
        &records,
        &stale,
        &columns(),
        &SortDirective::desc("recent_activity"),
        &row_id,
    );
    assert!(!frame.show_recent);
    assert!(!frame.columns.contains("recent_activity"));
    assert_eq!(frame.columns.active_sort(), None);
}

#[test]
fn test_empty_roster_summary() {
    let view = RosterView::new();
    let frame = view.render(
        &[],
        &UpdateHistory::none(),
        &columns(),
        &SortDirective::unsorted(),
        &row_id,
    );
    assert!(frame.rows.is_empty());
    assert_eq!(
        frame.pagination.summary(None),
        "Page 1 of 0 (25 per page, 0 total)"
    );
}
