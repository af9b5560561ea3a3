//! Per-source column mapping onto the identity fields.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// How a source supplies first and last names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameColumns {
    /// No name columns configured.
    #[default]
    None,
    /// One column holding the full name, split on whitespace.
    Full(String),
    /// Separate first/last name columns; either may be missing.
    Split {
        first: Option<String>,
        last: Option<String>,
    },
}

impl NameColumns {
    /// Builds the name mapping from the three optional column names.
    ///
    /// A full-name column excludes the split columns.
    pub fn from_parts(
        source_id: &str,
        full: Option<String>,
        first: Option<String>,
        last: Option<String>,
    ) -> Result<Self> {
        match (full, first, last) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                Err(ModelError::ConflictingNameColumns {
                    source_id: source_id.to_string(),
                })
            }
            (Some(full), None, None) => Ok(Self::Full(full)),
            (None, None, None) => Ok(Self::None),
            (None, first, last) => Ok(Self::Split { first, last }),
        }
    }
}

/// Which raw column supplies each identity field for one input table.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapping {
    pub source_id: String,
    pub email_column: Option<String>,
    pub name_columns: NameColumns,
    pub linkedin_column: Option<String>,
    /// Zero-based index of the header row in the raw table.
    pub header_row: usize,
}

impl SourceMapping {
    pub fn new(source_id: impl Into<String>) -> Result<Self> {
        let source_id = source_id.into();
        if source_id.trim().is_empty() {
            return Err(ModelError::EmptySourceId);
        }
        Ok(Self {
            source_id,
            email_column: None,
            name_columns: NameColumns::None,
            linkedin_column: None,
            header_row: 0,
        })
    }

    #[must_use]
    pub fn with_email(mut self, column: impl Into<String>) -> Self {
        self.email_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_full_name(mut self, column: impl Into<String>) -> Self {
        self.name_columns = NameColumns::Full(column.into());
        self
    }

    #[must_use]
    pub fn with_split_name(mut self, first: Option<String>, last: Option<String>) -> Self {
        self.name_columns = NameColumns::Split { first, last };
        self
    }

    #[must_use]
    pub fn with_linkedin(mut self, column: impl Into<String>) -> Self {
        self.linkedin_column = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_header_row(mut self, header_row: usize) -> Self {
        self.header_row = header_row;
        self
    }

    /// Prefix applied to every original column of this source.
    ///
    /// `"Waitlist Signup List"` becomes `"waitlist_signup_list_"`.
    #[must_use]
    pub fn column_prefix(&self) -> String {
        let mut prefix = self.source_id.trim().to_lowercase().replace(' ', "_");
        prefix.push('_');
        prefix
    }

    /// Whether this source can take part in the unified table.
    ///
    /// Sources without an email column are skipped rather than rejected.
    #[must_use]
    pub fn is_includable(&self) -> bool {
        self.email_column.is_some()
    }

    /// Every column name the mapping refers to, in a stable order.
    pub fn configured_columns(&self) -> Vec<&str> {
        let mut columns = Vec::with_capacity(4);
        if let Some(email) = &self.email_column {
            columns.push(email.as_str());
        }
        match &self.name_columns {
            NameColumns::None => {}
            NameColumns::Full(full) => columns.push(full.as_str()),
            NameColumns::Split { first, last } => {
                columns.extend(first.as_deref());
                columns.extend(last.as_deref());
            }
        }
        if let Some(linkedin) = &self.linkedin_column {
            columns.push(linkedin.as_str());
        }
        columns
    }
}
