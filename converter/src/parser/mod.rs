//! Tabular input readers.
//!
//! Turns a CSV file or a spreadsheet into a [`Table`]. The format is chosen
//! from the file extension. No vocabulary-specific logic here.

pub mod delimited;
pub mod table;
pub mod workbook;

use std::fmt;
use std::path::Path;

use crate::error::TableResult;

pub use delimited::{decode_content, detect_delimiter, detect_encoding};
pub use table::{Row, Table};

/// Input file format, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Delimited text (`.csv`).
    Csv,
    /// Any other extension: xlsx, xls, xlsb, ods.
    Spreadsheet,
}

impl SourceFormat {
    /// `.csv` (any case) is delimited text, everything else a spreadsheet.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => SourceFormat::Csv,
            _ => SourceFormat::Spreadsheet,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "CSV"),
            SourceFormat::Spreadsheet => write!(f, "spreadsheet"),
        }
    }
}

/// Reader settings.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// CSV delimiter (auto-detect if not specified)
    pub delimiter: Option<char>,
    /// Worksheet name (first sheet if not specified)
    pub sheet: Option<String>,
}

/// Result of reading a table with metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    pub table: Table,
    pub format: SourceFormat,
    /// Detected encoding (CSV only)
    pub encoding: Option<String>,
    /// Detected or used delimiter (CSV only)
    pub delimiter: Option<char>,
    /// Worksheet read (spreadsheet only)
    pub sheet: Option<String>,
}

/// Read a table from `path`, picking the reader from the extension.
pub fn read_table(path: &Path, options: &ReadOptions) -> TableResult<ParseResult> {
    match SourceFormat::from_path(path) {
        SourceFormat::Csv => {
            let parsed = delimited::parse_file(path, options.delimiter)?;
            Ok(ParseResult {
                table: parsed.table,
                format: SourceFormat::Csv,
                encoding: Some(parsed.encoding),
                delimiter: Some(parsed.delimiter),
                sheet: None,
            })
        }
        SourceFormat::Spreadsheet => {
            let parsed = workbook::parse_file(path, options.sheet.as_deref())?;
            Ok(ParseResult {
                table: parsed.table,
                format: SourceFormat::Spreadsheet,
                encoding: None,
                delimiter: None,
                sheet: Some(parsed.sheet),
            })
        }
    }
}
