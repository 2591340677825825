//! CLI argument definitions for the entries checker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "opl-check",
    version,
    about = "Check powerlifting result tables for data-entry mistakes",
    long_about = "Check powerlifting result tables for data-entry mistakes.\n\n\
                  Every entries.csv under the given paths is checked for column\n\
                  structure, cell formats and cross-column consistency.\n\
                  Exits non-zero if any error is found."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Check every entries.csv under the given paths.
    Check(CheckArgs),

    /// Print the known weight classes.
    Classes(ClassesArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Directories to search, or entries files to check directly.
    #[arg(value_name = "PATHS", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// TOML file overriding the plausibility thresholds.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// CSV file (scheme,sex,class) replacing the built-in weight classes.
    #[arg(long = "weight-classes", value_name = "CSV")]
    pub weight_classes: Option<PathBuf>,

    /// Write all findings as JSON to this file.
    #[arg(long = "report", value_name = "JSON")]
    pub report: Option<PathBuf>,

    /// Hide warnings in the printed summary. They still count and still go
    /// into the JSON report.
    #[arg(long = "errors-only")]
    pub errors_only: bool,
}

#[derive(Parser)]
pub struct ClassesArgs {
    /// CSV file (scheme,sex,class) to list instead of the built-in classes.
    #[arg(long = "weight-classes", value_name = "CSV")]
    pub weight_classes: Option<PathBuf>,
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
