//! Date/time helpers: the two fixed textual formats of the schedule domain.

use chrono::NaiveDateTime;

/// Patterns accepted for date cells inside the schedule, tried in order.
/// The first match wins.
pub const ROW_DATE_FORMATS: &[&str] = &["%d/%m/%y %H:%M"];

/// Format required for the --from/--to window boundaries.
pub const WINDOW_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub fn parse_row_datetime(s: &str) -> Option<NaiveDateTime> {
    ROW_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

pub fn parse_window_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, WINDOW_DATE_FORMAT).ok()
}

pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}
