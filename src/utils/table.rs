//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with display-width-aware padding. Cell text can carry accented
    /// characters coming from Latin-1 sources, so byte or char counts are
    /// not enough.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        out.push_str(&render_line(&self.headers, &widths));
        out.push_str(&separator(&widths));
        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }

        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.width());
                }
            }
        }
        widths
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push_str(cell);
        for _ in cell.width()..width + 2 {
            line.push(' ');
        }
    }
    line.truncate(line.trim_end().len());
    line.push('\n');
    line
}

fn separator(widths: &[usize]) -> String {
    let total: usize = widths.iter().map(|w| w + 2).sum();
    let mut line = "-".repeat(total.saturating_sub(2));
    line.push('\n');
    line
}
