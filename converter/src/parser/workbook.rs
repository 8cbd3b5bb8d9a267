//! Spreadsheet reader (xlsx, xlsm, xlsb, xls, ods).
//!
//! Every cell is rendered as text so identifiers such as `007` or `12`
//! survive unchanged.

use calamine::{open_workbook_auto, Data, Range, Reader};
use chrono::NaiveDateTime;
use std::path::Path;

use super::table::{Row, Table};
use crate::error::{TableError, TableResult};

/// Result of reading one worksheet.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub table: Table,
    pub sheet: String,
}

/// Read a worksheet of a workbook. Uses the first sheet unless `sheet` is given.
pub fn parse_file(path: &Path, sheet: Option<&str>) -> TableResult<SheetTable> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let sheet = match sheet {
        Some(name) if names.iter().any(|n| n == name) => name.to_string(),
        Some(name) => return Err(TableError::SheetNotFound(name.to_string())),
        None => names
            .first()
            .cloned()
            .ok_or_else(|| TableError::Spreadsheet("workbook has no worksheets".to_string()))?,
    };

    let range = workbook.worksheet_range(&sheet)?;
    let table = range_to_table(&range)?;

    Ok(SheetTable { table, sheet })
}

/// Convert a cell range to a table. The first row of the used range is the header.
pub fn range_to_table(range: &Range<Data>) -> TableResult<Table> {
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .ok_or(TableError::NoHeaders)?
        .iter()
        .map(|c| cell_to_text(c).trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(TableError::NoHeaders);
    }

    let rows = rows
        .enumerate()
        .map(|(index, cells)| Row::new(index, cells.iter().map(cell_to_text).collect()))
        .collect();

    Ok(Table::new(headers, rows))
}

/// Render a cell as text.
///
/// Integral numbers have no fractional part, very small or very large
/// numbers use exponent notation (`1e-07`), dates use
/// `YYYY-MM-DD HH:MM:SS`, time-only values `HH:MM:SS`, error cells are empty.
pub fn cell_to_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_float(*f),
        Data::Bool(true) => "True".to_string(),
        Data::Bool(false) => "False".to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) => format_datetime(dt.as_f64(), value),
            None => format_float(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

fn format_float(f: f64) -> String {
    let abs = f.abs();
    if !f.is_finite() || abs == 0.0 || (1e-4..1e16).contains(&abs) {
        return f.to_string();
    }

    // `{:e}` gives `1e-7`; the exponent is written signed and two digits wide
    let sci = format!("{:e}", f);
    match sci.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
        Some((mantissa, Ok(exp))) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => sci,
    }
}

/// Serials below one day carry no date part.
fn format_datetime(serial: f64, value: NaiveDateTime) -> String {
    if (0.0..1.0).contains(&serial) {
        value.format("%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
