//! CLI argument definitions for the survey cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "survey-scrub",
    version,
    about = "Clean a lung-cancer health-survey dataset",
    long_about = "Ingest a health-survey CSV, report data-quality diagnostics,\n\
                  normalize the GENDER and LUNG_CANCER columns to canonical labels,\n\
                  drop duplicate rows and implausible ages, write the cleaned table,\n\
                  and render the two category distribution charts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Allow row-level survey values in debug/trace logs.
    ///
    /// Survey rows are personal data; without this flag, logged cell values
    /// are replaced by a redaction placeholder.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a survey CSV and write the cleaned table.
    Clean(CleanArgs),

    /// Report data-quality diagnostics without cleaning anything.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the survey CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output path for the cleaned CSV (default: cleaned_dataset.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report and clean without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Skip the distribution charts.
    #[arg(long = "no-charts")]
    pub no_charts: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the survey CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
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
