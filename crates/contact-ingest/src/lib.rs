//! Contact ingestion utilities.
//!
//! This crate turns heterogeneous contact exports into one unified table of
//! [`Record`](contact_model::Record)s.
//!
//! # Features
//!
//! - **CSV Loading**: Read CSV files with an explicit zero-based header row
//! - **Source Configuration**: Load the per-source column mapping from TOML
//! - **Normalization**: Prefix original columns and derive identity fields
//! - **Discovery**: Find CSV files and suggest a starting mapping
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use contact_ingest::{SourcesConfig, normalize, read_csv_table};
//!
//! let config = SourcesConfig::load(Path::new("contacts.toml"))?;
//! for source in &config.sources {
//!     let mapping = source.mapping()?;
//!     let table = read_csv_table(&source.path, mapping.header_row)?;
//!     let records = normalize(&table, &mapping)?;
//! }
//! ```

mod config;
mod discovery;
mod error;
mod normalize;
mod suggest;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{CsvTable, normalize_header, read_csv_table};

// === Source Configuration ===
pub use config::{DEFAULT_OUTPUT_FILE, SourceConfig, SourcesConfig};

// === Normalization ===
pub use normalize::{normalize, split_full_name};

// === Discovery ===
pub use discovery::list_csv_files;
pub use suggest::{render_config_template, suggest_source_config};
