//! Domain models for the vocabulary conversion.
//!
//! - [`Record`] - one vocabulary entry of the output JSON array
//! - [`columns`] - fixed source header names of the vocabulary table
//! - [`DEFAULT_LEVEL`] - level label used when the level cell is blank

use serde::{Deserialize, Serialize};

/// Level assigned when the source level cell is blank.
pub const DEFAULT_LEVEL: &str = "初級";

/// Prefix of the positional placeholder id.
pub const PLACEHOLDER_ID_PREFIX: &str = "gen-";

// =============================================================================
// Source Columns
// =============================================================================

/// Header names of the vocabulary table, matched exactly.
pub mod columns {
    /// Primary identifier (row number in the word list).
    pub const PRIMARY_ID: &str = "編號";
    /// Secondary identifier (indigenous language council number), preferred over the primary.
    pub const SECONDARY_ID: &str = "原語會編號";
    /// Kaxabu term.
    pub const TERM: &str = "噶哈巫語";
    /// Chinese translation.
    pub const TRANSLATION: &str = "中文";
    /// Difficulty level.
    pub const LEVEL: &str = "難度";
    pub const CATEGORY: &str = "類別";
    pub const NOTE: &str = "備註";

    /// Columns a row cannot do without.
    pub const REQUIRED: [&str; 2] = [TERM, TRANSLATION];
}

// =============================================================================
// Record
// =============================================================================

/// One vocabulary entry as consumed by the application.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    /// Kaxabu term.
    #[serde(rename = "kaxabu")]
    pub term: String,
    /// Chinese gloss.
    #[serde(rename = "chinese")]
    pub translation: String,
    pub level: String,
    pub category: String,
    pub note: String,
}

impl Record {
    /// Positional placeholder id for a row without any identifier.
    pub fn placeholder_id(index: usize) -> String {
        format!("{}{}", PLACEHOLDER_ID_PREFIX, index)
    }

    /// Whether the id was generated from the row position.
    pub fn has_placeholder_id(&self) -> bool {
        self.id.starts_with(PLACEHOLDER_ID_PREFIX)
    }
}
