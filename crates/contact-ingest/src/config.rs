//! Source configuration loaded from a TOML file.
//!
//! ```toml
//! output = "deduplicated_output.csv"
//!
//! [[source]]
//! path = "CRM Export.csv"
//! header_row = 0
//! email = "Email"
//! first_name = "First Name"
//! last_name = "Last Name"
//!
//! [[source]]
//! path = "LinkedIn Connections.csv"
//! header_row = 3
//! email = "Email Address"
//! full_name = "Name"
//! linkedin = "URL"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use contact_model::{NameColumns, SourceMapping};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IngestError, Result};

/// Output file name used when neither the config nor the CLI names one.
pub const DEFAULT_OUTPUT_FILE: &str = "deduplicated_output.csv";

/// One `[[source]]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub path: PathBuf,
    /// Source id; defaults to the file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub header_row: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Trims a configured column name; blank means not configured.
fn column_name(value: Option<&String>) -> Option<String> {
    value
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

impl SourceConfig {
    /// Source id: the explicit `id`, else the file stem.
    pub fn source_id(&self) -> String {
        column_name(self.id.as_ref()).unwrap_or_else(|| {
            self.path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("source")
                .to_string()
        })
    }

    /// Builds the immutable column mapping for this source.
    pub fn mapping(&self) -> Result<SourceMapping> {
        let source_id = self.source_id();
        let name_columns = NameColumns::from_parts(
            &source_id,
            column_name(self.full_name.as_ref()),
            column_name(self.first_name.as_ref()),
            column_name(self.last_name.as_ref()),
        )?;
        let mut mapping = SourceMapping::new(source_id)?.with_header_row(self.header_row);
        mapping.email_column = column_name(self.email.as_ref());
        mapping.linkedin_column = column_name(self.linkedin.as_ref());
        mapping.name_columns = name_columns;
        Ok(mapping)
    }
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourcesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Sources in processing order.
    #[serde(rename = "source", default)]
    pub sources: Vec<SourceConfig>,
}

impl SourcesConfig {
    /// Loads and validates a configuration file.
    ///
    /// Relative paths resolve against the directory holding the file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| IngestError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let config = Self::parse(&contents, path)?.resolve_paths(base);
        debug!(
            path = %path.display(),
            sources = config.sources.len(),
            "loaded source configuration"
        );
        Ok(config)
    }

    /// Parses and validates configuration text; `origin` is used in errors only.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| IngestError::ConfigParse {
            path: origin.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |path: &Path| {
            if path.is_relative() {
                base.join(path)
            } else {
                path.to_path_buf()
            }
        };
        for source in &mut self.sources {
            source.path = resolve(&source.path);
        }
        self.output = self.output.as_deref().map(resolve);
        self
    }

    /// Rejects configurations whose sources would collide in the unified table.
    fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(IngestError::InvalidConfig {
                message: "no [[source]] entries configured".to_string(),
            });
        }
        let mut prefixes: BTreeMap<String, String> = BTreeMap::new();
        for source in &self.sources {
            let source_id = source.source_id();
            let prefix = SourceMapping::new(source_id.clone())?.column_prefix();
            if let Some(existing) = prefixes.insert(prefix.clone(), source_id.clone()) {
                return Err(IngestError::InvalidConfig {
                    message: format!(
                        "sources '{existing}' and '{source_id}' share the column prefix '{prefix}'"
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<SourcesConfig> {
        SourcesConfig::parse(contents, Path::new("contacts.toml"))
    }

    #[test]
    fn source_id_defaults_to_file_stem() {
        let config = parse("[[source]]\npath = \"Waitlist Signup List.csv\"\nemail = \"Email\"\n")
            .unwrap();
        let mapping = config.sources[0].mapping().unwrap();
        assert_eq!(mapping.source_id, "Waitlist Signup List");
        assert_eq!(mapping.email_column.as_deref(), Some("Email"));
        assert_eq!(mapping.header_row, 0);
    }

    #[test]
    fn blank_columns_are_not_configured() {
        let config = parse(
            "[[source]]\npath = \"a.csv\"\nemail = \"  \"\nfirst_name = \" First \"\nlinkedin = \"\"\n",
        )
        .unwrap();
        let mapping = config.sources[0].mapping().unwrap();
        assert_eq!(mapping.email_column, None);
        assert_eq!(mapping.linkedin_column, None);
        assert_eq!(
            mapping.name_columns,
            NameColumns::Split {
                first: Some("First".to_string()),
                last: None
            }
        );
        assert!(!mapping.is_includable());
    }

    #[test]
    fn full_name_conflicts_with_split_names() {
        let config = parse(
            "[[source]]\npath = \"a.csv\"\nemail = \"E\"\nfull_name = \"Name\"\nlast_name = \"Last\"\n",
        )
        .unwrap();
        let err = config.sources[0].mapping().unwrap_err();
        assert!(matches!(err, IngestError::InvalidConfig { .. }));
    }

    #[test]
    fn rejects_empty_and_colliding_sources() {
        assert!(matches!(
            parse("output = \"out.csv\"\n"),
            Err(IngestError::InvalidConfig { .. })
        ));
        let err = parse(
            "[[source]]\npath = \"a/CRM.csv\"\n\n[[source]]\npath = \"b/crm.csv\"\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("share the column prefix 'crm_'"));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse("[[source]]\npath = \"a.csv\"\nmail = \"Email\"\n").unwrap_err();
        assert!(matches!(err, IngestError::ConfigParse { .. }));
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let config = parse("output = \"out.csv\"\n[[source]]\npath = \"a.csv\"\n")
            .unwrap()
            .resolve_paths(Path::new("/data/uploads"));
        assert_eq!(config.sources[0].path, PathBuf::from("/data/uploads/a.csv"));
        assert_eq!(config.output, Some(PathBuf::from("/data/uploads/out.csv")));
    }
}
