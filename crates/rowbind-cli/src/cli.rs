//! CLI argument definitions for rowbind.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "rowbind",
    version,
    about = "Bind rows from tabular files into typed records",
    long_about = "Bind rows from tabular files into typed records.\n\n\
                  The first row of the input is the header. A binding file maps\n\
                  header labels to record fields and declares each field's kind;\n\
                  bound records are emitted as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Bind a CSV file into records and emit them as JSON.
    Bind(BindArgs),

    /// List the supported field kinds.
    Kinds,
}

#[derive(Parser)]
pub struct BindArgs {
    /// Path to the input CSV file. Its first row is the header.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to the JSON binding file (field declarations and label mapping).
    #[arg(long = "binding", value_name = "PATH")]
    pub binding: PathBuf,

    /// Write bound records to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report every cell that failed to coerce.
    ///
    /// Failed cells always bind as the field's zero value; this flag only
    /// surfaces them as warnings. It never changes the output records.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Resolution policy when several fields declare the same key.
    #[arg(long = "duplicates", value_enum, default_value = "first")]
    pub duplicates: DuplicatesArg,
}

/// Duplicate field key policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DuplicatesArg {
    First,
    Last,
    Reject,
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
