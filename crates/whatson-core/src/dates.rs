// Date labels for event cards

use chrono::{DateTime, Utc};

/// Format a single date the way cards display it, e.g. `Sat, 24 May 2026`.
pub fn format_event_date(date: DateTime<Utc>) -> String {
    date.format("%a, %-d %b %Y").to_string()
}

/// Date label for an event window.
///
/// The start date alone when there is no end date or the end falls on the
/// same calendar day; otherwise `"start - end"`.
pub fn format_event_dates(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> String {
    match end {
        Some(end) if end.date_naive() != start.date_naive() => {
            format!("{} - {}", format_event_date(start), format_event_date(end))
        }
        _ => format_event_date(start),
    }
}
