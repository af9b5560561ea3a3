use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use contact_ingest::{
    DEFAULT_OUTPUT_FILE, SourcesConfig, list_csv_files, read_csv_table, render_config_template,
    suggest_source_config,
};
use contact_model::{MatchSummary, RunReport};
use contact_cli::pipeline::{dedupe, ingest, write_output};

use crate::cli::{InitArgs, InspectArgs, RunArgs};
use crate::summary::apply_table_style;
use crate::types::RunResult;

const DEFAULT_CONFIG_FILE: &str = "contacts.toml";

pub fn run_dedupe(args: &RunArgs) -> Result<RunResult> {
    let run_span = info_span!("run", config = %args.config.display());
    let _run_guard = run_span.enter();

    let config = SourcesConfig::load(&args.config)
        .with_context(|| format!("load config {}", args.config.display()))?;
    let output_path = resolve_output_path(args, &config);

    // =========================================================================
    // Stage 1: Ingest - read and normalize each source, keep partial success
    // =========================================================================
    let ingest_start = Instant::now();
    let ingest_span = info_span!("ingest", sources = config.sources.len());
    let ingested = ingest_span.in_scope(|| ingest(&config));
    info!(
        records = ingested.records.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Dedupe - group and merge the unified table
    // =========================================================================
    let table = dedupe(&ingested.records);
    let matches = MatchSummary::from_rows(&table.rows);

    // =========================================================================
    // Stage 3: Output - deduplicated CSV and optional JSON report
    // =========================================================================
    let output = if args.dry_run {
        None
    } else {
        write_output(&table, &output_path)?;
        Some(output_path)
    };

    let report = RunReport {
        sources: ingested.sources,
        matches,
        output,
    };
    if let Some(path) = &args.report {
        write_report(&report, path)?;
    }

    let excluded = report.excluded_sources();
    if excluded > 0 {
        warn!(excluded, "some sources were excluded from the unified table");
    }
    Ok(RunResult {
        has_errors: args.strict && excluded > 0,
        dry_run: args.dry_run,
        report,
    })
}

fn resolve_output_path(args: &RunArgs, config: &SourcesConfig) -> PathBuf {
    args.output
        .clone()
        .or_else(|| config.output.clone())
        .unwrap_or_else(|| config_dir(&args.config).join(DEFAULT_OUTPUT_FILE))
}

fn config_dir(config: &Path) -> &Path {
    config.parent().unwrap_or_else(|| Path::new(""))
}

fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    std::fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let table = read_csv_table(&args.file, args.header_row)
        .with_context(|| format!("read {}", args.file.display()))?;

    println!("File: {}", args.file.display());
    println!("Data rows: {}", table.row_count());
    println!("Available columns: {}", table.headers.join(", "));

    let mut preview = Table::new();
    preview.set_header(table.headers.clone());
    apply_table_style(&mut preview);
    for row in table.rows.iter().take(args.rows) {
        preview.add_row(row.clone());
    }
    println!("{preview}");
    Ok(())
}

pub fn run_init(args: &InitArgs) -> Result<PathBuf> {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.folder.join(DEFAULT_CONFIG_FILE));
    if output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    let files = list_csv_files(&args.folder)
        .with_context(|| format!("list CSV files in {}", args.folder.display()))?;
    if files.is_empty() {
        bail!("no CSV files found in {}", args.folder.display());
    }

    let base = config_dir(&output);
    let mut config = SourcesConfig::default();
    for path in files {
        let headers = match read_csv_table(&path, 0) {
            Ok(table) => table.headers,
            Err(error) => {
                warn!(path = %path.display(), %error, "could not read headers");
                Vec::new()
            }
        };
        let relative = path.strip_prefix(base).unwrap_or(&path);
        config
            .sources
            .push(suggest_source_config(relative, 0, &headers));
    }

    let rendered = render_config_template(&config)?;
    std::fs::write(&output, rendered)
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        path = %output.display(),
        sources = config.sources.len(),
        "wrote starter configuration"
    );
    Ok(output)
}
