//! Conversion settings and default file names.

use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::parser::ReadOptions;

/// Input looked for when no path is given.
pub const DEFAULT_INPUT: &str = "噶哈巫語千詞表_分級0102.xlsx";

/// Appended to [`DEFAULT_INPUT`] to name its CSV export.
pub const CSV_FALLBACK_SUFFIX: &str = " - 已排序.csv";

/// Output written when no path is given.
pub const DEFAULT_OUTPUT: &str = "kaxabu_words.json";

/// Options for a conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Output JSON path
    pub output: PathBuf,

    /// CSV delimiter (auto-detect if not specified)
    pub delimiter: Option<char>,

    /// Worksheet to read (first sheet if not specified)
    pub sheet: Option<String>,

    /// Skip the record schema check
    pub skip_validation: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            delimiter: None,
            sheet: None,
            skip_validation: false,
        }
    }
}

impl ConvertOptions {
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            delimiter: self.delimiter,
            sheet: self.sheet.clone(),
        }
    }
}

/// Pick the input file.
///
/// An explicit path is returned as is. Otherwise [`DEFAULT_INPUT`] is tried
/// in `dir`, then its CSV export; when neither exists the error names both.
pub fn resolve_input(explicit: Option<&Path>, dir: &Path) -> ConvertResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let primary = dir.join(DEFAULT_INPUT);
    if primary.exists() {
        return Ok(primary);
    }

    let fallback = dir.join(format!("{}{}", DEFAULT_INPUT, CSV_FALLBACK_SUFFIX));
    if fallback.exists() {
        return Ok(fallback);
    }

    Err(ConvertError::DefaultInputNotFound { primary, fallback })
}
