//! CLI argument parsing for assay
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use assay_core::format::OutputFormat;
use parse::parse_format;

/// Assay - rubric-driven feedback for student submissions
#[derive(Parser, Debug)]
#[command(name = "assay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level or filter directive (e.g. "info", "assay_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Rubric configuration file (TOML)
    #[arg(long, global = true, env = "ASSAY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assess every submission in a directory and write the feedback report
    Assess {
        /// Directory containing pdf/docx/pptx/txt submissions
        dir: PathBuf,

        /// Report path (default: the configured report file inside DIR)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print the report instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Assess a single submission and show its category breakdown
    Score {
        /// Submission file
        file: PathBuf,

        /// Batch position used to select the closing line
        #[arg(long, default_value_t = 0)]
        sequence: usize,
    },

    /// Show the effective lexicon registry
    Lexicon,
}
