//! Error types for the vocabulary conversion.
//!
//! - [`TableError`] - reading and parsing the input table
//! - [`ConvertError`] - top-level conversion errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Table Errors
// =============================================================================

/// Errors while reading the input table (CSV or spreadsheet).
#[derive(Debug, Error)]
pub enum TableError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Bytes could not be decoded with the detected encoding.
    #[error("Failed to decode content as {0}")]
    Encoding(String),

    /// Delimiter is not a single ASCII character.
    #[error("Invalid delimiter '{0}': must be a single ASCII character")]
    InvalidDelimiter(char),

    /// Invalid CSV content.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook could not be opened or a sheet could not be read.
    #[error("Invalid spreadsheet: {0}")]
    Spreadsheet(String),

    /// Requested worksheet does not exist.
    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),

    /// No header row.
    #[error("No headers found in table")]
    NoHeaders,
}

impl From<calamine::Error> for TableError {
    fn from(e: calamine::Error) -> Self {
        TableError::Spreadsheet(e.to_string())
    }
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No input given and none of the default files exist.
    #[error("Default input not found: tried '{}' and '{}'", .primary.display(), .fallback.display())]
    DefaultInputNotFound { primary: PathBuf, fallback: PathBuf },

    /// Table reading/parsing error.
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Records failed the schema check.
    #[error("Validation failed for {count} record(s): {first}")]
    Validation { count: usize, first: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output file failed.
    #[error("Failed to write output '{}': {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Process exit status for this error.
    ///
    /// `2` when the input could not be found, `1` for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::NotFound(_) | ConvertError::DefaultInputNotFound { .. } => 2,
            _ => 1,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for table reading.
pub type TableResult<T> = Result<T, TableError>;

/// Result type for conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let table_err = TableError::NoHeaders;
        let convert_err: ConvertError = table_err.into();
        assert!(convert_err.to_string().contains("No headers"));
        assert_eq!(convert_err.exit_code(), 1);
    }

    #[test]
    fn test_not_found_exit_code() {
        let err = ConvertError::NotFound(PathBuf::from("missing.xlsx"));
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("missing.xlsx"));
    }

    #[test]
    fn test_default_input_message_names_both_files() {
        let err = ConvertError::DefaultInputNotFound {
            primary: PathBuf::from("a.xlsx"),
            fallback: PathBuf::from("a.xlsx - sorted.csv"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'a.xlsx'"));
        assert!(msg.contains("'a.xlsx - sorted.csv'"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_output_error_format() {
        let err = ConvertError::Output {
            path: PathBuf::from("out/words.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/words.json"));
        assert!(msg.contains("denied"));
    }
}
