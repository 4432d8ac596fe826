//! File decoding: extension dispatch, CSV encoding fallback, spreadsheet
//! reading via calamine.

use std::fs;
use std::path::Path;

use calamine::{Data, Range, Reader, Xls, Xlsx, open_workbook};
use encoding_rs::Encoding;

use crate::errors::{AppError, AppResult};
use crate::models::table::{RawCell, RawTable};
use crate::ui::messages::info;
use crate::utils::datetime::ROW_DATE_FORMATS;

/// Text encodings tried, in this exact order, when reading a CSV file.
/// Deterministic so a given input always decodes the same way.
pub const CSV_ENCODINGS: &[&str] = &["utf-8", "latin1", "iso-8859-1", "cp1252"];

/// Decode a schedule file into a raw table, dispatching on the extension.
pub fn decode(path: &Path) -> AppResult<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => decode_csv(path),
        "xlsx" => decode_xlsx(path),
        "xls" => decode_xls(path),
        other => Err(AppError::UnsupportedFormat(format!(".{other}"))),
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

fn decode_csv(path: &Path) -> AppResult<RawTable> {
    let bytes = fs::read(path)?;

    for label in CSV_ENCODINGS {
        info(format!("Trying to read CSV as {label}"));
        match try_encoding(&bytes, label) {
            Ok(table) => {
                info(format!("CSV decoded as {label}"));
                return Ok(table);
            }
            Err(reason) => info(format!("Failed to read CSV as {label}: {reason}")),
        }
    }

    Err(AppError::Decode("no encoding succeeded".to_string()))
}

/// One decoding attempt. Any failure — invalid byte sequences as well as CSV
/// parse errors — is reported back so the caller moves to the next label.
fn try_encoding(bytes: &[u8], label: &str) -> Result<RawTable, String> {
    let encoding =
        Encoding::for_label(label.as_bytes()).ok_or_else(|| format!("unknown label {label}"))?;

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(format!("input is not valid {label}"));
    }

    parse_csv_text(&text)
}

fn parse_csv_text(text: &str) -> Result<RawTable, String> {
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| e.to_string())?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = RawTable::new(columns);
    for record in reader.records() {
        let record = record.map_err(|e| e.to_string())?;
        table.push_row(record.iter().map(text_cell).collect());
    }

    Ok(table)
}

fn text_cell(value: &str) -> RawCell {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Spreadsheets
// ---------------------------------------------------------------------------

fn decode_xlsx(path: &Path) -> AppResult<RawTable> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| AppError::Decode(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Decode("workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::Decode(e.to_string()))?;
    table_from_range(&range)
}

fn decode_xls(path: &Path) -> AppResult<RawTable> {
    let mut workbook: Xls<_> =
        open_workbook(path).map_err(|e: calamine::XlsError| AppError::Decode(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Decode("workbook has no worksheets".to_string()))?
        .map_err(|e| AppError::Decode(e.to_string()))?;
    table_from_range(&range)
}

/// First worksheet row is the header; everything below is data.
fn table_from_range(range: &Range<Data>) -> AppResult<RawTable> {
    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| AppError::Decode("worksheet is empty".to_string()))?;

    let columns: Vec<String> = header.iter().map(|c| c.to_string()).collect();

    let mut table = RawTable::new(columns);
    for row in rows {
        table.push_row(row.iter().map(spreadsheet_cell).collect());
    }

    Ok(table)
}

/// Stringify a spreadsheet cell. Typed datetime cells are written in the
/// canonical row format so they parse like their CSV counterparts.
fn spreadsheet_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => None,
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format(ROW_DATE_FORMATS[0]).to_string()),
        other => {
            let s = other.to_string();
            if s.trim().is_empty() { None } else { Some(s) }
        }
    }
}
