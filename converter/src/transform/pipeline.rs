//! File → file conversion pipeline.
//!
//! Combines all steps: reading the table, mapping rows to records,
//! checking records against the schema and writing the JSON array.
//!
//! # Example
//!
//! ```rust,ignore
//! use kaxabu::{convert_file, ConvertOptions};
//! use std::path::Path;
//!
//! let summary = convert_file(Path::new("words.xlsx"), &ConvertOptions::default())?;
//! println!("Wrote {} records", summary.records);
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::mapper::{table_to_records, MapResult};
use crate::config::ConvertOptions;
use crate::error::{ConvertError, ConvertResult};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::{columns, Record};
use crate::parser::{read_table, ParseResult, SourceFormat, Table};
use crate::validation::RecordValidator;

/// Outcome of a successful conversion
#[derive(Debug, Clone)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: SourceFormat,
    pub headers: Vec<String>,
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows dropped for being blank across all columns
    pub blank_rows: usize,
    /// Rows skipped for a missing term or translation
    pub skipped_rows: usize,
    /// Records written
    pub records: usize,
    /// Records whose id is a positional placeholder
    pub placeholder_ids: usize,
}

/// Convert the vocabulary table at `input` to a JSON file.
///
/// Nothing is written unless every step succeeds.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> ConvertResult<ConvertSummary> {
    if !input.exists() {
        return Err(ConvertError::NotFound(input.to_path_buf()));
    }

    log_info(format!("📖 Reading file: {}", input.display()));
    let parsed = read_table(input, &options.read_options())?;
    print_parse_result(&parsed);

    let headers = parsed.table.headers.clone();
    let rows_read = parsed.table.len();
    warn_missing_columns(&parsed.table);

    log_info("⚙️  Mapping rows...");
    let result = table_to_records(parsed.table);
    print_map_result(&result);

    if options.skip_validation {
        log_info("(validation skipped)");
    } else {
        log_info("✔️  Validating records...");
        check_records(&result.records)?;
        log_success(format!("All {} records valid", result.records.len()));
    }

    write_records(&result.records, &options.output)?;
    log_success(format!("💾 JSON saved to: {}", options.output.display()));

    Ok(ConvertSummary {
        input: input.to_path_buf(),
        output: options.output.clone(),
        format: parsed.format,
        headers,
        rows_read,
        blank_rows: result.blank_rows,
        skipped_rows: result.skipped.len(),
        records: result.records.len(),
        placeholder_ids: result.records.iter().filter(|r| r.has_placeholder_id()).count(),
    })
}

/// Serialize records as a two-space indented JSON array, non-ASCII kept literal.
pub fn records_to_json(records: &[Record]) -> ConvertResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path` atomically.
///
/// The JSON goes to a temporary file next to `path` which then replaces it,
/// so `path` is either fully written or left untouched. An existing file
/// keeps its permissions; a new one gets the usual umask-based mode.
pub fn write_records(records: &[Record], path: &Path) -> ConvertResult<()> {
    let json = records_to_json(records)?;
    let output_err = |source| ConvertError::Output {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(path).ok().map(|meta| meta.permissions());
    let mut builder = tempfile::Builder::new();
    if let (None, Some(mode)) = (&existing, new_file_permissions()) {
        builder.permissions(mode);
    }

    let mut tmp = builder.tempfile_in(dir).map_err(output_err)?;
    if let Some(permissions) = existing {
        tmp.as_file().set_permissions(permissions).map_err(output_err)?;
    }
    tmp.write_all(json.as_bytes()).map_err(output_err)?;
    tmp.as_file().sync_all().map_err(output_err)?;
    tmp.persist(path).map_err(|e| output_err(e.error))?;

    Ok(())
}

/// `0o644` before the umask, the mode a plain file create would get.
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Check every record against the embedded record schema.
pub fn check_records(records: &[Record]) -> ConvertResult<()> {
    let validator = RecordValidator::new().map_err(|message| ConvertError::Validation {
        count: records.len(),
        first: message,
    })?;

    let mut invalid = 0;
    let mut first = None;

    for record in records {
        let value = serde_json::to_value(record)?;
        if let Err(errors) = validator.validate(&value) {
            invalid += 1;
            if first.is_none() {
                first = Some(format!("record '{}': {}", record.id, errors.join(", ")));
            }
        }
    }

    match first {
        None => Ok(()),
        Some(first) => Err(ConvertError::Validation {
            count: invalid,
            first,
        }),
    }
}

fn print_parse_result(parsed: &ParseResult) {
    log_success(format!("Read {} rows ({})", parsed.table.len(), parsed.format));
    if let Some(ref encoding) = parsed.encoding {
        log_info_indent(format!("Encoding: {}", encoding), 1);
    }
    if let Some(delimiter) = parsed.delimiter {
        log_info_indent(format!("Delimiter: '{}'", format_delimiter(delimiter)), 1);
    }
    if let Some(ref sheet) = parsed.sheet {
        log_info_indent(format!("Sheet: {}", sheet), 1);
    }

    log_info(format!("📋 Table has {} columns:", parsed.table.headers.len()));
    for (i, col) in parsed.table.headers.iter().enumerate() {
        log_info_indent(format!("[{:2}] {}", i + 1, col), 1);
    }
}

fn warn_missing_columns(table: &Table) {
    for col in columns::REQUIRED {
        if !table.has_column(col) {
            log_warning(format!("Required column '{}' not found, every row will be skipped", col));
        }
    }
}

fn print_map_result(result: &MapResult) {
    if result.blank_rows > 0 {
        log_info(format!("{} blank rows dropped", result.blank_rows));
    }
    if !result.skipped.is_empty() {
        log_warning(format!(
            "{} rows skipped (missing term or translation)",
            result.skipped.len()
        ));
    }
    log_success(format!("Conversion done: {} valid records", result.records.len()));
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, term: &str, translation: &str) -> Record {
        Record {
            id: id.into(),
            term: term.into(),
            translation: translation.into(),
            level: "初級".into(),
            category: String::new(),
            note: String::new(),
        }
    }

    #[test]
    fn test_json_layout() {
        let json = records_to_json(&[record("gen-0", "aba", "水")]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"id\": \"gen-0\",\n    \"kaxabu\": \"aba\",\n    \"chinese\": \"水\",\n    \"level\": \"初級\",\n    \"category\": \"\",\n    \"note\": \"\"\n  }\n]"
        );
    }

    #[test]
    fn test_empty_json_array() {
        assert_eq!(records_to_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_write_records_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "stale").unwrap();

        write_records(&[record("1", "aba", "水")], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"chinese\": \"水\""));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_records_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("words.json");

        let err = write_records(&[], &path).unwrap_err();
        assert!(matches!(err, ConvertError::Output { .. }));
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_new_output_mode_follows_umask() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.txt");
        fs::write(&plain, "").unwrap();
        let plain_mode = fs::metadata(&plain).unwrap().permissions().mode() & 0o777;

        let path = dir.path().join("words.json");
        write_records(&[record("1", "aba", "水")], &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, plain_mode & 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_output_keeps_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "stale").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_records(&[record("1", "aba", "水")], &path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_check_records() {
        assert!(check_records(&[record("1", "aba", "水")]).is_ok());

        let err = check_records(&[record("1", "aba", "水"), record("", "saw", "人")]).unwrap_err();
        match err {
            ConvertError::Validation { count, .. } => assert_eq!(count, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_format_delimiter() {
        assert_eq!(format_delimiter('\t'), "\\t");
        assert_eq!(format_delimiter(';'), ";");
    }
}
