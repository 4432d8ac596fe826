use chrono::NaiveDateTime;

use crate::errors::{AppError, AppResult};
use crate::utils::datetime::parse_window_datetime;

/// Inclusive closed interval of timestamps used to retain activities.
///
/// `from <= to` is deliberately not enforced: an inverted window is legal
/// and simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateWindow {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
}

impl DateWindow {
    /// Parse the two boundary strings (DD/MM/YYYY HH:MM). A non-conforming
    /// boundary is reported by name together with the offending text.
    pub fn parse(from: &str, to: &str) -> AppResult<Self> {
        let from_dt = parse_window_datetime(from).ok_or_else(|| AppError::InvalidWindow {
            which: "start",
            raw: from.to_string(),
        })?;
        let to_dt = parse_window_datetime(to).ok_or_else(|| AppError::InvalidWindow {
            which: "end",
            raw: to.to_string(),
        })?;

        Ok(Self {
            from: from_dt,
            to: to_dt,
        })
    }

    /// Both bounds inclusive.
    pub fn contains(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start >= self.from && end <= self.to
    }
}
