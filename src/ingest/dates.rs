//! Date normalization: parse one date column against the accepted patterns,
//! recording which rows fail and why.

use chrono::NaiveDateTime;

use crate::models::table::RawTable;
use crate::utils::datetime::parse_row_datetime;

/// One date cell that matched no accepted pattern. The row is later dropped
/// from the working set but the run continues.
#[derive(Debug, Clone, PartialEq)]
pub struct DateFailure {
    pub row: usize,
    pub activity: Option<String>,
    pub raw: String,
}

/// Parse one date column of the table.
///
/// Missing cells map to `None` directly and are not failures. Non-missing
/// cells are tried against the pattern list in order; a cell matching no
/// pattern maps to `None` and is recorded with its original text.
pub fn normalize(
    table: &RawTable,
    column: &str,
    id_column: &str,
) -> (Vec<Option<NaiveDateTime>>, Vec<DateFailure>) {
    let mut parsed = Vec::with_capacity(table.len());
    let mut failures = Vec::new();

    for row in 0..table.len() {
        match table.cell(row, column) {
            None => parsed.push(None),
            Some(raw) => match parse_row_datetime(raw) {
                Some(dt) => parsed.push(Some(dt)),
                None => {
                    failures.push(DateFailure {
                        row,
                        activity: table.cell(row, id_column).map(str::to_string),
                        raw: raw.to_string(),
                    });
                    parsed.push(None);
                }
            },
        }
    }

    (parsed, failures)
}
