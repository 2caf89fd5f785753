//! CLI argument definitions for income prediction.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use income_cli::preview::DEFAULT_PREVIEW_ROWS;

#[derive(Parser)]
#[command(
    name = "income-predict",
    version,
    about = "Predict census income brackets for an uploaded CSV",
    long_about = "Predict whether each person in a census-style CSV earns more than 50K.\n\n\
                  The upload is aligned to the feature schema of a trained linear model;\n\
                  results are written as the filtered rows plus a Predicted_Income column."
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

    /// Allow census row values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Predict income brackets for an uploaded CSV file.
    Predict(PredictArgs),

    /// List a model's feature schema and how each feature is derived.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Uploaded census CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Linear model artifact (JSON with feature_names and coefficients).
    #[arg(long = "model", short = 'm', value_name = "PATH")]
    pub model: PathBuf,

    /// Results file path (default: <output-dir>/predicted_income_results.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH", conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Directory for the results file (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Predict and report without writing the results file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Keep every row, including excluded workclass values.
    #[arg(long = "no-row-filter", conflicts_with = "exclude_workclass")]
    pub no_row_filter: bool,

    /// Workclass value to exclude (repeatable; default: Without-pay, Never-worked).
    #[arg(long = "exclude-workclass", value_name = "VALUE")]
    pub exclude_workclass: Vec<String>,

    /// Ordering of categorical levels; must match how the model was trained.
    #[arg(long = "category-order", value_enum, default_value = "lexicographic")]
    pub category_order: CategoryOrderArg,

    /// Rows shown in the upload and results previews.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,

    /// Reject uploads larger than this many megabytes.
    #[arg(long = "max-file-size-mb", value_name = "MB", default_value_t = 500)]
    pub max_file_size_mb: u64,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Linear model artifact (JSON with feature_names and coefficients).
    #[arg(long = "model", short = 'm', value_name = "PATH")]
    pub model: PathBuf,

    /// Resolve features against this CSV's header instead of the full census catalogue.
    #[arg(long = "input", value_name = "CSV_FILE")]
    pub input: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryOrderArg {
    Lexicographic,
    FirstSeen,
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
