//! # Kaxabu - vocabulary table to JSON conversion
//!
//! Converts the Kaxabu (噶哈巫語) word list, kept as a spreadsheet or a CSV
//! export, into the JSON record array consumed by the learning application.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ XLSX / CSV   │────▶│   Parser    │────▶│   Mapper    │────▶│  JSON file  │
//! │ (any enc.)   │     │  (Table)    │     │  (Records)  │     │  (atomic)   │
//! └──────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kaxabu::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! let summary = convert_file(Path::new("words.xlsx"), &ConvertOptions::default()).unwrap();
//! println!("Converted {} records", summary.records);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Options and default file names
//! - [`logs`] - Console log entries
//! - [`models`] - Output record and source column names
//! - [`parser`] - CSV and spreadsheet readers
//! - [`transform`] - Row mapping and the conversion pipeline
//! - [`validation`] - Record schema validation

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Parsing
pub mod parser;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{resolve_input, ConvertOptions, DEFAULT_INPUT, DEFAULT_OUTPUT};

pub use error::{ConvertError, ConvertResult, TableError, TableResult};

pub use models::{columns, Record, DEFAULT_LEVEL};

pub use parser::{read_table, ParseResult, ReadOptions, Row, SourceFormat, Table};

pub use transform::{
    check_records,
    convert_file,
    map_row,
    records_to_json,
    table_to_records,
    write_records,
    ConvertSummary,
    MapResult,
    SkippedRow,
};

pub use validation::RecordValidator;
