//! CSV file reading with an explicit header row.

use std::path::Path;

use ::csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

use super::header::normalize_headers;

/// A raw source table: trimmed header names plus untouched cell values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    /// Data rows, each padded or truncated to `headers.len()`.
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Builds a table from in-memory rows, normalizing headers like the reader does.
    pub fn from_rows<H, S>(headers: &[H], rows: Vec<Vec<S>>) -> Self
    where
        H: AsRef<str>,
        S: Into<String>,
    {
        let headers = normalize_headers(headers.iter().map(AsRef::as_ref));
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|row| fit_row(row.into_iter().map(Into::into).collect(), width))
            .collect();
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn fit_row(mut row: Vec<String>, width: usize) -> Vec<String> {
    row.resize(width, String::new());
    row
}

/// A blank line: no cells, or one cell holding only whitespace.
///
/// Delimiter-only lines such as `,,,` are data rows with every value absent.
fn is_blank_line(row: &[String]) -> bool {
    match row {
        [] => true,
        [only] => only.trim().is_empty(),
        _ => false,
    }
}

fn check_readable(path: &Path) -> Result<()> {
    std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    Ok(())
}

/// Reads a CSV file whose header sits at zero-based `header_row`.
///
/// Blank lines are skipped before the header row is located, so
/// `header_row` counts non-blank lines. Rows above the header are discarded.
pub fn read_csv_table(path: &Path, header_row: usize) -> Result<CsvTable> {
    check_readable(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if is_blank_line(&row) {
            continue;
        }
        raw_rows.push(row);
    }

    if header_row >= raw_rows.len() {
        return Err(IngestError::HeaderRowOutOfBounds {
            path: path.to_path_buf(),
            header_row,
            row_count: raw_rows.len(),
        });
    }

    let mut rows = raw_rows.split_off(header_row);
    let header = rows.remove(0);
    let headers = normalize_headers(header.iter().map(String::as_str));
    let width = headers.len();
    let rows: Vec<Vec<String>> = rows.into_iter().map(|row| fit_row(row, width)).collect();

    debug!(
        path = %path.display(),
        header_row,
        columns = width,
        rows = rows.len(),
        "read csv table"
    );
    Ok(CsvTable { headers, rows })
}
