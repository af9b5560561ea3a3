//! Pipeline stages: ingest, dedupe, output.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::{info, info_span, trace, warn};

use contact_dedup::group_and_merge;
use contact_ingest::{IngestError, SourceConfig, SourcesConfig, normalize, read_csv_table};
use contact_model::{MergedTable, Record, SourceOutcome, SourceSummary};

use crate::logging::redact_value;

/// Unified table plus what happened to each configured source.
#[derive(Debug, Default)]
pub struct IngestResult {
    /// Records of all included sources, in source order then row order.
    pub records: Vec<Record>,
    pub sources: Vec<SourceSummary>,
}

enum SourceLoad {
    Loaded(Vec<Record>),
    Skipped(String),
}

fn load_source(source: &SourceConfig) -> Result<SourceLoad, IngestError> {
    let mapping = source.mapping()?;
    if !mapping.is_includable() {
        return Ok(SourceLoad::Skipped("no email column configured".to_string()));
    }
    let table = read_csv_table(&source.path, mapping.header_row)?;
    let records = normalize(&table, &mapping)?;
    Ok(SourceLoad::Loaded(records))
}

/// Fails a source whose prefixed columns are already owned by an included source.
fn check_column_collisions(
    source_id: &str,
    records: &[Record],
    owners: &BTreeMap<String, String>,
) -> Result<(), IngestError> {
    let Some(first) = records.first() else {
        return Ok(());
    };
    for column in first.column_names() {
        if let Some(existing) = owners.get(column) {
            return Err(IngestError::ColumnCollision {
                source_id: source_id.to_string(),
                column: column.to_string(),
                existing: existing.clone(),
            });
        }
    }
    Ok(())
}

/// Reads and normalizes every configured source.
///
/// A source that is skipped or fails is recorded and left out; the
/// remaining sources still make up the unified table. A source whose
/// prefixed column names clash with an earlier included source fails.
pub fn ingest(config: &SourcesConfig) -> IngestResult {
    let mut result = IngestResult::default();
    let mut owners: BTreeMap<String, String> = BTreeMap::new();
    for source in &config.sources {
        let source_id = source.source_id();
        let span = info_span!("source", source_id = %source_id);
        let _guard = span.enter();

        let loaded = load_source(source).and_then(|load| match load {
            SourceLoad::Loaded(records) => {
                check_column_collisions(&source_id, &records, &owners)?;
                Ok(SourceLoad::Loaded(records))
            }
            skipped => Ok(skipped),
        });
        let (outcome, records) = match loaded {
            Ok(SourceLoad::Loaded(records)) => {
                info!(records = records.len(), "source included");
                (SourceOutcome::Included, records)
            }
            Ok(SourceLoad::Skipped(reason)) => {
                warn!(%reason, "source skipped");
                (SourceOutcome::Skipped { reason }, Vec::new())
            }
            Err(error) => {
                warn!(%error, "source excluded");
                (
                    SourceOutcome::Failed {
                        error: error.to_string(),
                    },
                    Vec::new(),
                )
            }
        };

        if let Some(first) = records.first() {
            for column in first.column_names() {
                owners.insert(column.to_string(), source_id.clone());
            }
        }
        for record in &records {
            trace!(
                email = redact_value(record.identity.email.as_deref().unwrap_or("")),
                "normalized record"
            );
        }
        result.sources.push(SourceSummary {
            source_id,
            path: source.path.clone(),
            outcome,
            records: records.len(),
        });
        result.records.extend(records);
    }
    result
}

/// Groups the unified table and merges each group.
pub fn dedupe(records: &[Record]) -> MergedTable {
    let span = info_span!("dedupe", records = records.len());
    let _guard = span.enter();
    let start = Instant::now();
    let table = group_and_merge(records);
    info!(
        groups = table.len(),
        columns = table.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "dedupe complete"
    );
    table
}

/// Writes the merged table as CSV to any writer.
pub fn write_table<W: Write>(table: &MergedTable, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);
    csv_writer
        .write_record(table.header())
        .context("write header")?;
    for row in &table.rows {
        csv_writer
            .write_record(table.row_cells(row))
            .context("write row")?;
    }
    csv_writer.flush().context("flush output")?;
    Ok(())
}

/// Writes the merged table to `path`, creating parent directories.
pub fn write_output(table: &MergedTable, path: &Path) -> Result<()> {
    let span = info_span!("output", path = %path.display());
    let _guard = span.enter();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_table(table, file).with_context(|| format!("write {}", path.display()))?;
    info!(rows = table.len(), "output written");
    Ok(())
}
