//! The pipeline orchestrator.
//!
//! Linear stages, no branching back:
//! Decode → Validate → NormalizeDates → DropNullDates → FilterPrefix →
//! ParseWindow → FilterRange → ComputeDuration. Each stage either produces
//! the input for the next or aborts the run with its own error, wrapped in
//! `Processing` for top-level reporting. Per-row date failures are the only
//! tolerated anomaly: the row is dropped, the failure is reported.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::errors::{AppError, AppResult};
use crate::ingest::dates::{self, DateFailure};
use crate::ingest::{decode, filter, schema};
use crate::models::schedule::{CleanDataset, ScheduleRow};
use crate::models::table::RawTable;
use crate::models::window::DateWindow;
use crate::ui::messages::warning;

/// Everything a successful run produces: the clean rows plus the per-row
/// date diagnostics collected along the way.
#[derive(Debug)]
pub struct PipelineReport {
    pub dataset: CleanDataset,
    pub failures: Vec<DateFailure>,
    pub window: DateWindow,
}

/// Outcome of a dry run (`check`): no filtering, no rendering.
#[derive(Debug)]
pub struct InspectReport {
    pub columns: Vec<String>,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub failures: Vec<DateFailure>,
}

/// Run the full pipeline against a schedule file.
///
/// The existence check runs before the staged part and is reported as-is;
/// every stage-local error is wrapped in `Processing`.
pub fn process(path: &Path, from: &str, to: &str, prefix: &str) -> AppResult<PipelineReport> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    run_stages(path, from, to, prefix).map_err(|e| AppError::Processing(Box::new(e)))
}

/// Decode, validate and normalize only.
pub fn inspect(path: &Path) -> AppResult<InspectReport> {
    if !path.exists() {
        return Err(AppError::FileNotFound(path.display().to_string()));
    }

    inspect_stages(path).map_err(|e| AppError::Processing(Box::new(e)))
}

fn run_stages(path: &Path, from: &str, to: &str, prefix: &str) -> AppResult<PipelineReport> {
    // Decode → Validate
    let table = schema::validate(&decode::decode(path)?)?;

    // NormalizeDates, each column independently
    let (starts, start_failures) = dates::normalize(&table, schema::COL_START, schema::COL_ID);
    let (ends, end_failures) = dates::normalize(&table, schema::COL_END, schema::COL_ID);
    report_failures(schema::COL_START, &start_failures);
    report_failures(schema::COL_END, &end_failures);

    // DropNullDates
    let rows: Vec<ScheduleRow> = build_rows(&table, &starts, &ends)
        .into_iter()
        .filter(ScheduleRow::has_dates)
        .collect();

    if rows.is_empty() {
        return Err(AppError::EmptyResult {
            stage: "cleaning".to_string(),
            reason: "no rows with two valid dates".to_string(),
        });
    }

    // FilterPrefix
    let rows = filter::by_prefix(rows, prefix)?;

    // ParseWindow → FilterRange
    let window = DateWindow::parse(from, to)?;
    let rows = filter::by_window(rows, &window)?;

    // ComputeDuration
    let rows = with_durations(rows);

    let mut failures = start_failures;
    failures.extend(end_failures);

    Ok(PipelineReport {
        dataset: CleanDataset::new(rows),
        failures,
        window,
    })
}

fn inspect_stages(path: &Path) -> AppResult<InspectReport> {
    let table = schema::validate(&decode::decode(path)?)?;

    let (starts, start_failures) = dates::normalize(&table, schema::COL_START, schema::COL_ID);
    let (ends, end_failures) = dates::normalize(&table, schema::COL_END, schema::COL_ID);
    report_failures(schema::COL_START, &start_failures);
    report_failures(schema::COL_END, &end_failures);

    let valid_rows = starts
        .iter()
        .zip(&ends)
        .filter(|(s, e)| s.is_some() && e.is_some())
        .count();

    let mut failures = start_failures;
    failures.extend(end_failures);

    Ok(InspectReport {
        columns: table.columns().to_vec(),
        total_rows: table.len(),
        valid_rows,
        failures,
    })
}

fn build_rows(
    table: &RawTable,
    starts: &[Option<NaiveDateTime>],
    ends: &[Option<NaiveDateTime>],
) -> Vec<ScheduleRow> {
    (0..table.len())
        .map(|i| ScheduleRow {
            activity_id: table.cell(i, schema::COL_ID).map(str::to_string),
            activity: table
                .cell(i, schema::COL_ACTIVITY)
                .unwrap_or_default()
                .to_string(),
            task: table
                .cell(i, schema::COL_TASK)
                .unwrap_or_default()
                .to_string(),
            start: starts[i],
            end: ends[i],
            responsible: table
                .cell(i, schema::COL_RESPONSIBLE)
                .unwrap_or_default()
                .to_string(),
            duration_hours: 0.0,
        })
        .collect()
}

/// Final stage: attach elapsed hours to every surviving row. Rows reach
/// this point with both dates set; negative values pass through untouched.
fn with_durations(rows: Vec<ScheduleRow>) -> Vec<ScheduleRow> {
    rows.into_iter()
        .map(|mut row| {
            row.duration_hours = row.elapsed_hours().unwrap_or(0.0);
            row
        })
        .collect()
}

fn report_failures(column: &str, failures: &[DateFailure]) {
    for f in failures {
        warning(format!(
            "Invalid date in {column} (row {}, activity {}): '{}'",
            f.row + 1,
            f.activity.as_deref().unwrap_or("?"),
            f.raw
        ));
    }
}
