use chrono::NaiveDateTime;

/// One validated schedule record.
///
/// Created from a raw table row; `start`/`end` are filled by the date
/// normalizer and stay `None` when the source cell was missing or
/// unparsable. Rows without both dates never reach the final dataset.
#[derive(Debug, Clone)]
pub struct ScheduleRow {
    pub activity_id: Option<String>,
    pub activity: String,
    pub task: String,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub responsible: String,
    /// Derived field, set by the final pipeline stage.
    pub duration_hours: f64,
}

impl ScheduleRow {
    pub fn has_dates(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Elapsed hours between start and end. Negative when the end precedes
    /// the start; that is tolerated, not rejected.
    pub fn elapsed_hours(&self) -> Option<f64> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some((e - s).num_seconds() as f64 / 3600.0),
            _ => None,
        }
    }
}

/// The final ordered record set: validated, normalized, filtered and ready
/// for rendering. Owned by a single pipeline invocation.
#[derive(Debug, Clone, Default)]
pub struct CleanDataset {
    pub rows: Vec<ScheduleRow>,
}

impl CleanDataset {
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct responsible values, in first-appearance order.
    pub fn resources(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.responsible) {
                seen.push(row.responsible.clone());
            }
        }
        seen
    }

    pub fn earliest_start(&self) -> Option<NaiveDateTime> {
        self.rows.iter().filter_map(|r| r.start).min()
    }

    pub fn latest_end(&self) -> Option<NaiveDateTime> {
        self.rows.iter().filter_map(|r| r.end).max()
    }
}
