//! Row filtering: identifier prefix match and date-window containment.

use crate::errors::{AppError, AppResult};
use crate::models::schedule::ScheduleRow;
use crate::models::window::DateWindow;
use crate::utils::datetime::WINDOW_DATE_FORMAT;

/// Keep rows whose activity number starts with `prefix`. Case-sensitive;
/// rows without an activity number never match.
pub fn by_prefix(rows: Vec<ScheduleRow>, prefix: &str) -> AppResult<Vec<ScheduleRow>> {
    let kept: Vec<ScheduleRow> = rows
        .into_iter()
        .filter(|r| {
            r.activity_id
                .as_deref()
                .is_some_and(|id| id.starts_with(prefix))
        })
        .collect();

    if kept.is_empty() {
        return Err(AppError::EmptyResult {
            stage: "prefix filter".to_string(),
            reason: format!("no activities start with '{prefix}'"),
        });
    }

    Ok(kept)
}

/// Keep rows fully inside the window, both bounds inclusive. Rows reaching
/// this stage always carry both dates; anything else is dropped.
pub fn by_window(rows: Vec<ScheduleRow>, window: &DateWindow) -> AppResult<Vec<ScheduleRow>> {
    let kept: Vec<ScheduleRow> = rows
        .into_iter()
        .filter(|r| match (r.start, r.end) {
            (Some(start), Some(end)) => window.contains(start, end),
            _ => false,
        })
        .collect();

    if kept.is_empty() {
        return Err(AppError::EmptyResult {
            stage: "date window".to_string(),
            reason: format!(
                "no activities between {} and {}",
                window.from.format(WINDOW_DATE_FORMAT),
                window.to.format(WINDOW_DATE_FORMAT)
            ),
        });
    }

    Ok(kept)
}
