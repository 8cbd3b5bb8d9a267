//! In-memory table shared by the CSV and spreadsheet readers.
//!
//! A [`Table`] holds the ordered header list and the data rows. Each [`Row`]
//! keeps its cells in header order plus its zero-based position among the
//! data rows of the read.

/// Cell texts read as missing values, compared exactly (no trimming).
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// True when a cell text stands for a missing value.
pub fn is_missing_marker(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell)
}

/// One data row of the input table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Position among the data rows (header excluded).
    pub index: usize,
    /// Cell texts in header order; missing cells are empty.
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(index: usize, cells: Vec<String>) -> Self {
        Self { index, cells }
    }

    /// True when every cell is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

/// Header row plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Build a table, padding or truncating every row to the header width.
    ///
    /// Cells holding a [`MISSING_MARKERS`] text become empty.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.cells.resize(width, String::new());
                for cell in row.cells.iter_mut().filter(|c| is_missing_marker(c)) {
                    cell.clear();
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Position of the first column with this exact header.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Cell of `row` under header `name`, or `""` when the column is absent.
    pub fn cell<'a>(&self, row: &'a Row, name: &str) -> &'a str {
        self.column_index(name)
            .and_then(|i| row.cells.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Remove rows that are blank across all columns. Returns how many were removed.
    pub fn drop_blank_rows(&mut self) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !row.is_blank());
        before - self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
