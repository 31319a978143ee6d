//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "adcat",
    version,
    about = "Translate between source ad category codes and IAB content categories",
    long_about = "Translate between source ad category codes and IAB content categories.\n\n\
                  The correspondence table is embedded in the binary. Use --mapping or\n\
                  ADCAT_MAPPING_FILE to load a different one."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Correspondence resource to load instead of the embedded one.
    #[arg(long = "mapping", value_name = "PATH", global = true)]
    pub mapping: Option<PathBuf>,

    /// Drop records whose source code is larger than this.
    #[arg(long = "max-source-code", value_name = "CODE", global = true)]
    pub max_source_code: Option<u32>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table", global = true)]
    pub format: OutputFormatArg,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Translate source category codes to IAB content categories.
    ToIab {
        /// Source category codes.
        #[arg(value_name = "CODE", required = true)]
        codes: Vec<u32>,
    },

    /// Translate IAB content categories to source category codes.
    ToSource {
        /// Categories as IAB ids (IAB7), numeric codes (7) or names (HealthFitness).
        #[arg(value_name = "CATEGORY", required = true)]
        categories: Vec<String>,
    },

    /// List the loaded categories with their descriptions.
    Describe {
        /// List source codes instead of IAB categories.
        #[arg(long = "source")]
        source: bool,
    },

    /// Show how the correspondence resource was loaded.
    Stats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
