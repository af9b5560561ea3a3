//! CLI argument definitions for contact deduplication.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "contact-dedupe",
    version,
    about = "Merge contact exports from several CSV files into one deduplicated list",
    long_about = "Merge contact exports from several CSV files into one deduplicated list.\n\n\
                  Records are matched on email, then LinkedIn URL, then first + last name,\n\
                  and each group is flattened into one row tagged with MATCH_STATUS."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow emails, names, and URLs to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Deduplicate the sources listed in a configuration file.
    Run(RunArgs),

    /// Preview a CSV file's columns and first rows.
    Inspect(InspectArgs),

    /// Write a starter configuration for every CSV file in a folder.
    Init(InitArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Source configuration file (TOML).
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: PathBuf,

    /// Output CSV path (default: config `output`, else deduplicated_output.csv next to the config).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write a JSON run report.
    #[arg(long = "report", value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Group and report without writing the output CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with an error if any source was skipped or failed.
    #[arg(long = "strict")]
    pub strict: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// CSV file to preview.
    #[arg(value_name = "CSV")]
    pub file: PathBuf,

    /// Zero-based index of the header row.
    #[arg(long = "header-row", default_value_t = 0)]
    pub header_row: usize,

    /// Number of data rows to show.
    #[arg(long = "rows", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Folder containing the CSV exports.
    #[arg(value_name = "FOLDER")]
    pub folder: PathBuf,

    /// Where to write the configuration (default: <FOLDER>/contacts.toml).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing configuration file.
    #[arg(long = "force")]
    pub force: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
