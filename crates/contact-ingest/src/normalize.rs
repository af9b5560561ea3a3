//! Record normalization: raw source table to unified-table records.

use contact_model::{IdentityFields, NameColumns, Record, SourceMapping};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::table::CsvTable;

/// Column positions of the identity fields within one source table.
#[derive(Debug, Default)]
struct IdentityColumns {
    email: Option<usize>,
    full_name: Option<usize>,
    first_name: Option<usize>,
    last_name: Option<usize>,
    linkedin: Option<usize>,
}

impl IdentityColumns {
    fn resolve(table: &CsvTable, mapping: &SourceMapping) -> Result<Self> {
        let lookup = |column: Option<&str>| -> Result<Option<usize>> {
            let Some(column) = column else {
                return Ok(None);
            };
            table
                .column_index(column)
                .map(Some)
                .ok_or_else(|| IngestError::MissingColumn {
                    source_id: mapping.source_id.clone(),
                    column: column.to_string(),
                    available: table.headers.clone(),
                })
        };

        let mut columns = Self {
            email: lookup(mapping.email_column.as_deref())?,
            ..Self::default()
        };
        match &mapping.name_columns {
            NameColumns::None => {}
            NameColumns::Full(full) => columns.full_name = lookup(Some(full.as_str()))?,
            NameColumns::Split { first, last } => {
                columns.first_name = lookup(first.as_deref())?;
                columns.last_name = lookup(last.as_deref())?;
            }
        }
        columns.linkedin = lookup(mapping.linkedin_column.as_deref())?;
        Ok(columns)
    }

    fn identity(&self, row: &[String]) -> IdentityFields {
        let cell = |index: Option<usize>| index.and_then(|idx| standardize(&row[idx]));
        let (first_name, last_name) = match self.full_name {
            Some(idx) => split_full_name(&row[idx]),
            None => (cell(self.first_name), cell(self.last_name)),
        };
        IdentityFields {
            email: cell(self.email),
            first_name,
            last_name,
            linkedin: cell(self.linkedin),
        }
    }
}

/// Trimmed value, or `None` when nothing is left.
fn standardize(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Raw value kept as-is, or `None` for a blank cell.
fn raw_value(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

/// Splits a full name on whitespace into (first token, last token).
///
/// A single token fills both halves; a blank value yields neither.
pub fn split_full_name(value: &str) -> (Option<String>, Option<String>) {
    let mut tokens = value.split_whitespace();
    let Some(first) = tokens.next() else {
        return (None, None);
    };
    let last = tokens.next_back().unwrap_or(first);
    (Some(first.to_string()), Some(last.to_string()))
}

/// Normalizes one source table into unified-table records.
///
/// Every original column is kept under the source's prefix. A mapping
/// without an email column yields no records; a configured column missing
/// from the header fails with [`IngestError::MissingColumn`].
pub fn normalize(table: &CsvTable, mapping: &SourceMapping) -> Result<Vec<Record>> {
    if !mapping.is_includable() {
        warn!(
            source_id = %mapping.source_id,
            "no email column configured, skipping source"
        );
        return Ok(Vec::new());
    }

    let identity_columns = IdentityColumns::resolve(table, mapping)?;
    let prefix = mapping.column_prefix();
    let prefixed: Vec<String> = table
        .headers
        .iter()
        .map(|header| format!("{prefix}{header}"))
        .collect();

    let records: Vec<Record> = table
        .rows
        .iter()
        .map(|row| Record {
            source_id: mapping.source_id.clone(),
            columns: prefixed
                .iter()
                .zip(row)
                .map(|(name, value)| (name.clone(), raw_value(value)))
                .collect(),
            identity: identity_columns.identity(row),
        })
        .collect();

    debug!(
        source_id = %mapping.source_id,
        records = records.len(),
        columns = prefixed.len(),
        "normalized source"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_full_name_takes_first_and_last_tokens() {
        assert_eq!(
            split_full_name("  Jane  Q.  Doe "),
            (Some("Jane".to_string()), Some("Doe".to_string()))
        );
        assert_eq!(
            split_full_name("Cher"),
            (Some("Cher".to_string()), Some("Cher".to_string()))
        );
        assert_eq!(split_full_name("   "), (None, None));
    }

    #[test]
    fn standardize_trims_and_drops_blank() {
        assert_eq!(standardize("  x@y.com "), Some("x@y.com".to_string()));
        assert_eq!(standardize("   "), None);
    }

    #[test]
    fn raw_value_keeps_original_text() {
        assert_eq!(raw_value(" Jane "), Some(" Jane ".to_string()));
        assert_eq!(raw_value(""), None);
    }
}
