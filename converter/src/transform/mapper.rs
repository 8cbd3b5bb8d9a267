//! Row → record mapping.
//!
//! Turns table rows into [`Record`]s: blank rows are dropped, rows without a
//! term or translation are skipped, the id falls back from the secondary id
//! to the primary id to a positional placeholder.

use crate::models::{columns, Record, DEFAULT_LEVEL};
use crate::parser::{Row, Table};

/// A row that was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Row index among the data rows
    pub row: usize,
    /// Required columns that were empty
    pub missing_fields: Vec<&'static str>,
}

/// Result of mapping a table
#[derive(Debug, Clone, Default)]
pub struct MapResult {
    /// Records in source row order
    pub records: Vec<Record>,
    /// Rows skipped due to an empty term or translation
    pub skipped: Vec<SkippedRow>,
    /// Rows dropped for being blank across all columns
    pub blank_rows: usize,
}

impl MapResult {
    /// Get summary statistics
    pub fn summary(&self) -> String {
        format!(
            "{} records, {} skipped, {} blank rows",
            self.records.len(),
            self.skipped.len(),
            self.blank_rows
        )
    }
}

/// Map every row of `table` to a record, in order.
pub fn table_to_records(mut table: Table) -> MapResult {
    let blank_rows = table.drop_blank_rows();
    let mut result = MapResult {
        blank_rows,
        ..MapResult::default()
    };

    for row in &table.rows {
        match map_row(&table, row) {
            Ok(record) => result.records.push(record),
            Err(skipped) => result.skipped.push(skipped),
        }
    }

    result
}

/// Map one row. Fails with the empty required columns when the row has no
/// term or no translation.
pub fn map_row(table: &Table, row: &Row) -> Result<Record, SkippedRow> {
    let field = |name: &str| table.cell(row, name).trim().to_string();

    let term = field(columns::TERM);
    let translation = field(columns::TRANSLATION);

    if term.is_empty() || translation.is_empty() {
        let missing_fields = [(columns::TERM, &term), (columns::TRANSLATION, &translation)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        return Err(SkippedRow {
            row: row.index,
            missing_fields,
        });
    }

    Ok(Record {
        id: first_non_empty([field(columns::SECONDARY_ID), field(columns::PRIMARY_ID)])
            .unwrap_or_else(|| Record::placeholder_id(row.index)),
        term,
        translation,
        level: first_non_empty([field(columns::LEVEL)]).unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        category: field(columns::CATEGORY),
        note: field(columns::NOTE),
    })
}

fn first_non_empty<const N: usize>(candidates: [String; N]) -> Option<String> {
    candidates.into_iter().find(|c| !c.is_empty())
}
