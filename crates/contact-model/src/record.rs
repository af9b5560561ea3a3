//! Unified-table records.

use serde::{Deserialize, Serialize};

/// Standardized identity fields derived from a source row.
///
/// Each field is either a non-empty trimmed string or `None`. A blank cell in
/// a configured column and an unconfigured column both read as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityFields {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub linkedin: Option<String>,
}

/// One row of the unified table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub source_id: String,
    /// Prefixed original columns in source order; `None` marks a blank cell.
    pub columns: Vec<(String, Option<String>)>,
    pub identity: IdentityFields,
}

impl Record {
    /// Raw value of a prefixed column, if present and non-blank.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Present (non-blank) cells in source order.
    pub fn present_values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name.as_str(), value)))
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record {
            source_id: "crm".to_string(),
            columns: vec![
                ("crm_Email".to_string(), Some("x@y.com".to_string())),
                ("crm_Notes".to_string(), None),
            ],
            identity: IdentityFields::default(),
        }
    }

    #[test]
    fn value_skips_blank_cells() {
        let record = record();
        assert_eq!(record.value("crm_Email"), Some("x@y.com"));
        assert_eq!(record.value("crm_Notes"), None);
        assert_eq!(record.value("crm_Missing"), None);
    }

    #[test]
    fn present_values_keep_source_order() {
        let record = record();
        let present: Vec<_> = record.present_values().collect();
        assert_eq!(present, vec![("crm_Email", "x@y.com")]);
        assert_eq!(record.column_names().count(), 2);
    }
}
