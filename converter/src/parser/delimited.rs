//! Delimited text (CSV) reader with encoding and delimiter auto-detection.

use std::path::Path;

use super::table::{Row, Table};
use crate::error::{TableError, TableResult};

/// Delimiters tried by [`detect_delimiter`], in order of preference.
const CANDIDATE_DELIMITERS: [char; 4] = [',', ';', '\t', '|'];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 (with or without BOM) is always reported as `utf-8`; other
/// content is handed to chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if std::str::from_utf8(body).is_ok() {
        return "utf-8".to_string();
    }

    let charset = chardet::detect(bytes).0;

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "big5" | "big5-hkscs" | "cp950" => "big5".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to a string using the given encoding label.
///
/// A leading BOM is stripped. Unknown labels fall back to UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> TableResult<String> {
    let encoding_impl =
        encoding_rs::Encoding::for_label(encoding.as_bytes()).unwrap_or(encoding_rs::UTF_8);
    let (text, used, had_errors) = encoding_impl.decode(bytes);
    if had_errors {
        return Err(TableError::Encoding(used.name().to_string()));
    }
    Ok(text.into_owned())
}

/// Detect the delimiter by counting occurrences in the header line.
///
/// Falls back to `,` when no candidate appears.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &CANDIDATE_DELIMITERS {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse delimited text. The first record is the header row.
///
/// Completely empty lines are not records. Short rows are padded with
/// empty cells.
pub fn parse_str(content: &str, delimiter: char) -> TableResult<Table> {
    let delimiter_byte = u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(TableError::InvalidDelimiter(delimiter))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());
    let mut records = reader.records();

    let header = records.next().ok_or(TableError::NoHeaders)??;
    let headers: Vec<String> = header
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(TableError::NoHeaders);
    }

    let mut rows = Vec::new();
    for (index, record) in records.enumerate() {
        let record = record?;
        rows.push(Row::new(index, record.iter().map(str::to_string).collect()));
    }

    Ok(Table::new(headers, rows))
}

/// Result of decoding and parsing CSV bytes.
#[derive(Debug, Clone)]
pub struct DelimitedTable {
    pub table: Table,
    pub encoding: String,
    pub delimiter: char,
}

/// Parse CSV bytes, detecting the encoding and (unless given) the delimiter.
pub fn parse_bytes(bytes: &[u8], delimiter: Option<char>) -> TableResult<DelimitedTable> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));
    let table = parse_str(&content, delimiter)?;

    Ok(DelimitedTable {
        table,
        encoding,
        delimiter,
    })
}

/// Read and parse a CSV file.
pub fn parse_file(path: &Path, delimiter: Option<char>) -> TableResult<DelimitedTable> {
    let bytes = std::fs::read(path)?;
    parse_bytes(&bytes, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_csv() {
        let table = parse_str("編號,噶哈巫語,中文\n1,aba,水\n2,saw,人", ',').unwrap();

        assert_eq!(table.headers, vec!["編號", "噶哈巫語", "中文"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(&table.rows[0], "噶哈巫語"), "aba");
        assert_eq!(table.cell(&table.rows[1], "中文"), "人");
    }

    #[test]
    fn test_quoted_values_keep_delimiters() {
        let csv = "a,b\n\"x, y\",\"say \"\"hi\"\"\"";
        let table = parse_str(csv, ',').unwrap();

        assert_eq!(table.rows[0].cells, vec!["x, y", "say \"hi\""]);
    }

    #[test]
    fn test_empty_lines_do_not_consume_index() {
        let table = parse_str("a,b\n1,2\n\n3,4\n", ',').unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].index, 1);
    }

    #[test]
    fn test_delimiter_only_line_is_a_row() {
        let table = parse_str("a,b\n,\n3,4\n", ',').unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.rows[0].is_blank());
        assert_eq!(table.rows[1].index, 1);
    }

    #[test]
    fn test_missing_values_padded() {
        let table = parse_str("a;b;c\n1", ';').unwrap();
        assert_eq!(table.rows[0].cells, vec!["1", "", ""]);
    }

    #[test]
    fn test_headers_trimmed() {
        let table = parse_str(" 中文 ,備註\n水,", ',').unwrap();
        assert_eq!(table.headers, vec!["中文", "備註"]);
    }

    #[test]
    fn test_missing_markers_read_as_empty() {
        let table = parse_str("a,b,c\nNA,nan,aba", ',').unwrap();
        assert_eq!(table.rows[0].cells, vec!["", "", "aba"]);
    }

    #[test]
    fn test_empty_csv_error() {
        assert!(matches!(parse_str("", ','), Err(TableError::NoHeaders)));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        assert!(matches!(parse_str("a，b", '，'), Err(TableError::InvalidDelimiter('，'))));
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
        assert_eq!(detect_delimiter("a|b|c\n1|2|3"), '|');
        assert_eq!(detect_delimiter("single"), ',');
    }

    #[test]
    fn test_utf8_bom_stripped() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("編號,中文\n1,水".as_bytes());
        let parsed = parse_bytes(&bytes, None).unwrap();

        assert_eq!(parsed.encoding, "utf-8");
        assert_eq!(parsed.table.headers[0], "編號");
    }

    #[test]
    fn test_big5_decoding() {
        let (encoded, _, _) = encoding_rs::BIG5.encode("中文,備註\n水,山");
        let decoded = decode_content(&encoded, "big5").unwrap();
        assert_eq!(decoded, "中文,備註\n水,山");
    }

    #[test]
    fn test_invalid_utf8_reported() {
        let bytes: &[u8] = &[0x61, 0xFF, 0xFE, 0x62];
        assert!(matches!(decode_content(bytes, "utf-8"), Err(TableError::Encoding(_))));
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_explicit_delimiter_wins() {
        let parsed = parse_bytes("a;b,c\n1;2,3".as_bytes(), Some(';')).unwrap();
        assert_eq!(parsed.delimiter, ';');
        assert_eq!(parsed.table.headers, vec!["a", "b,c"]);
    }
}
