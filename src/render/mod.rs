//! Chart-renderer collaborator: maps the clean dataset to the record shape
//! the timeline library consumes and builds the HTML artifact. Persisting
//! the artifact is the caller's job, never the pipeline's.

pub mod colors;
pub mod html;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::schedule::CleanDataset;

/// One bar of the timeline.
#[derive(Debug, Clone, Serialize)]
pub struct ChartRecord {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "Finish")]
    pub finish: String,
    #[serde(rename = "Resource")]
    pub resource: String,
}

/// Rendering knobs that are not data.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
}

impl ChartOptions {
    /// Chart height grows with the number of bars.
    pub fn height(&self, records: usize) -> u32 {
        400 + records as u32 * 30
    }
}

/// Map the clean dataset to chart records.
pub fn chart_records(dataset: &CleanDataset) -> Vec<ChartRecord> {
    dataset
        .rows
        .iter()
        .map(|row| ChartRecord {
            task: row.activity_id.clone().unwrap_or_default(),
            description: format!("{} - {}", row.task, row.activity),
            start: iso(row.start),
            finish: iso(row.end),
            resource: row.responsible.clone(),
        })
        .collect()
}

fn iso(dt: Option<NaiveDateTime>) -> String {
    dt.map(|d| d.format("%Y-%m-%dT%H:%M:%S").to_string())
        .unwrap_or_default()
}
