use chrono::{DateTime, NaiveDate, Utc};

/// Renders the elapsed time between two optional instants.
///
/// Either endpoint missing, or `end` earlier than `start`, yields an empty
/// string: the interval is not yet measurable, which is not an error.
/// Otherwise the result is whole hours and remaining whole minutes, with the
/// hour part dropped when zero and the minute part dropped when zero but
/// hours are present. Sub-minute remainders are truncated.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use yardboard_core::domain::timefmt::elapsed;
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 3, 1, 11, 30, 0).unwrap();
/// assert_eq!(elapsed(Some(start), Some(end)), "2h 30min");
/// assert_eq!(elapsed(Some(end), Some(start)), "");
/// ```
pub fn elapsed(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> String {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end),
        _ => return String::new(),
    };

    if end < start {
        return String::new();
    }

    let delta = end - start;
    let hours = delta.num_hours();
    let minutes = delta.num_minutes() % 60;

    if hours == 0 {
        format!("{}min", minutes)
    } else if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, minutes)
    }
}

/// Formats a calendar date as `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats an instant as `DD/MM/YYYY HH:MM`.
pub fn format_date_time(instant: DateTime<Utc>) -> String {
    instant.format("%d/%m/%Y %H:%M").to_string()
}

/// Compact display for board cards: `HH:MM` when the instant falls on
/// `today`, the full `DD/MM/YYYY HH:MM` otherwise.
pub fn format_time_compact(instant: DateTime<Utc>, today: NaiveDate) -> String {
    if instant.date_naive() == today {
        instant.format("%H:%M").to_string()
    } else {
        format_date_time(instant)
    }
}
