//! Week Calculator
//!
//! Buckets dates into ISO weeks keyed by their Monday.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Date format used by the form's week field and the wire payload
pub const WEEK_KEY_FORMAT: &str = "%Y-%m-%d";

/// Monday of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Sunday closing the week that starts at `week_start(date)`
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let start = week_start(date);
    start.checked_add_days(Days::new(6)).unwrap_or(start)
}

/// Epoch milliseconds of the week's Monday at local midnight.
///
/// `None` when local midnight does not exist (a DST gap at 00:00).
pub fn week_start_timestamp(date: NaiveDate) -> Option<i64> {
    let midnight = week_start(date).and_hms_opt(0, 0, 0)?;
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}

/// Monday of the current local week
pub fn current_week() -> NaiveDate {
    week_start(Local::now().date_naive())
}

/// Parse a server or form date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 instants (read in local time) and naive
/// `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, WEEK_KEY_FORMAT) {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Form/wire representation of a week key
pub fn format_week_key(date: NaiveDate) -> String {
    date.format(WEEK_KEY_FORMAT).to_string()
}

/// "Jan 06, 2025"
pub fn format_display(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

/// "Jan 06, 2025 – Jan 12, 2025"
pub fn week_range_label(date: NaiveDate) -> String {
    format!("{} – {}", format_display(week_start(date)), format_display(week_end(date)))
}

/// Same weekday one week earlier/later
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    let days = Days::new(weeks.unsigned_abs() * 7);
    let shifted = if weeks < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    };
    shifted.unwrap_or(date)
}
