//! Schema validation: required-column membership and empty-row dropping.

use crate::errors::{AppError, AppResult};
use crate::models::table::RawTable;

pub const COL_ID: &str = "Activity Number";
pub const COL_ACTIVITY: &str = "Activity";
pub const COL_TASK: &str = "Milestone/task";
pub const COL_START: &str = "Start Date (CET)";
pub const COL_END: &str = "End Date (CET)";
pub const COL_RESPONSIBLE: &str = "Responsible Person";

/// Columns every schedule file must provide. Order in the file is
/// irrelevant; extra columns are tolerated and ignored.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_ID,
    COL_ACTIVITY,
    COL_TASK,
    COL_START,
    COL_END,
    COL_RESPONSIBLE,
];

/// Check that all required columns are present, reporting every missing one
/// at once, then drop rows whose every cell is empty.
pub fn validate(table: &RawTable) -> AppResult<RawTable> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| table.column_index(c).is_none())
        .map(|c| c.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Schema(missing));
    }

    Ok(table.filter_rows(|cells| cells.iter().any(|c| c.is_some())))
}
