//! Transformation module.
//!
//! - Mapper: table rows to vocabulary records
//! - Pipeline: input file to JSON file

pub mod mapper;
pub mod pipeline;

pub use mapper::{map_row, table_to_records, MapResult, SkippedRow};
pub use pipeline::*;
