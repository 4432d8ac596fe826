//! Raw tabular data as decoded from the input file, before any validation.

/// One decoded cell: `None` when the source cell is empty or absent.
pub type RawCell = Option<String>;

/// An ordered row table with a shared header. Every row has exactly as many
/// cells as there are columns; `push_row` pads or truncates to keep that
/// invariant.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, mut cells: Vec<RawCell>) {
        cells.resize(self.columns.len(), None);
        self.rows.push(cells);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows (the header is not a row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell lookup by row index and column name. Returns `None` for missing
    /// rows, unknown columns and empty cells alike.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// Build a new table keeping only the rows the predicate accepts.
    pub fn filter_rows(&self, keep: impl Fn(&[RawCell]) -> bool) -> RawTable {
        RawTable {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
