//! CLI argument definitions.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Segment speech transcripts into highlight clips.
#[derive(Debug, Parser)]
#[command(name = "clippa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Transcript files or directories to process.
    pub inputs: Vec<PathBuf>,

    /// Common options for processing.
    #[command(flatten)]
    pub analyze: AnalyzeArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for transcript processing.
#[derive(Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct AnalyzeArgs {
    /// Minimum clip duration in seconds before a pause may end it.
    #[arg(long, value_parser = parse_duration, env = "CLIPPA_MIN_DURATION")]
    pub min_duration: Option<f64>,

    /// Maximum clip duration in seconds.
    #[arg(long, value_parser = parse_duration, env = "CLIPPA_MAX_DURATION")]
    pub max_duration: Option<f64>,

    /// Silence gap in seconds treated as a natural break.
    #[arg(long, value_parser = parse_duration, env = "CLIPPA_PAUSE_THRESHOLD")]
    pub pause_threshold: Option<f64>,

    /// Output formats (comma-separated: json,csv).
    #[arg(short, long, value_delimiter = ',', env = "CLIPPA_FORMAT")]
    pub format: Option<Vec<OutputFormat>>,

    /// Output directory (default: same as input).
    #[arg(short, long, env = "CLIPPA_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Reprocess files even if output exists.
    #[arg(long)]
    pub force: bool,

    /// Stop on first error.
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable the progress bar.
    #[arg(long)]
    pub no_progress: bool,

    /// Omit the UTF-8 BOM from CSV output.
    #[arg(long)]
    pub no_csv_bom: bool,
}

/// Parse and validate a duration value in seconds.
fn parse_duration(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(format!("duration must be a positive number, got {value}"));
    }

    Ok(value)
}
