//! Error types for contact ingestion.

use std::path::PathBuf;

use contact_model::ModelError;
use thiserror::Error;

/// Errors that can occur while loading configuration or source tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The file is not a parseable delimited table.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The configured header row lies beyond the end of the file.
    #[error("header row {header_row} is out of bounds for {path} ({row_count} non-blank rows)")]
    HeaderRowOutOfBounds {
        path: PathBuf,
        header_row: usize,
        row_count: usize,
    },

    // === Mapping Errors ===
    /// A configured column does not exist in the source header.
    #[error(
        "column '{column}' not found in source '{source_id}'. Available columns: {}",
        available.join(", ")
    )]
    MissingColumn {
        source_id: String,
        column: String,
        available: Vec<String>,
    },

    /// A prefixed column name is already produced by an earlier source.
    #[error("column '{column}' of source '{source_id}' collides with source '{existing}'")]
    ColumnCollision {
        source_id: String,
        column: String,
        existing: String,
    },

    // === Configuration Errors ===
    /// Failed to read the configuration file.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for the expected schema.
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to render a configuration template.
    #[error("failed to render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// Configuration is well-formed but semantically invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl IngestError {
    /// Whether this error means the table itself could not be read.
    #[must_use]
    pub fn is_malformed_table(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. }
                | Self::FileRead { .. }
                | Self::CsvParse { .. }
                | Self::HeaderRowOutOfBounds { .. }
        )
    }
}

impl From<ModelError> for IngestError {
    fn from(err: ModelError) -> Self {
        Self::InvalidConfig {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_missing_column_lists_available() {
        let err = IngestError::MissingColumn {
            source_id: "crm".to_string(),
            column: "E-mail".to_string(),
            available: vec!["Email".to_string(), "Name".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "column 'E-mail' not found in source 'crm'. Available columns: Email, Name"
        );
        assert!(!err.is_malformed_table());
    }

    #[test]
    fn test_column_collision_names_both_sources() {
        let err = IngestError::ColumnCollision {
            source_id: "crm old".to_string(),
            column: "crm_old_Notes".to_string(),
            existing: "crm".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'crm_old_Notes' of source 'crm old' collides with source 'crm'"
        );
    }

    #[test]
    fn test_error_from_model() {
        let err: IngestError = ModelError::EmptySourceId.into();
        assert!(matches!(err, IngestError::InvalidConfig { .. }));
    }
}
