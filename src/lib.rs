//! Clippa - transcript-to-highlight-clip segmentation CLI tool.
//!
//! This crate turns speech transcripts into non-overlapping highlight
//! clips suitable for downstream video clipping.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod segmenter;
pub mod transcript;

use clap::Parser;
use cli::{AnalyzeArgs, Cli, Command};
use config::{
    Config, SegmenterConfig, config_file_path, load_default_config, save_default_config,
    validate_segmenter_config,
};
use pipeline::{ProcessCheck, collect_input_files, output_dir_for, process_file, should_process};
use std::path::PathBuf;
use tracing::{error, info, warn};

pub use error::{Error, Result};

/// Main entry point for clippa CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.analyze.verbose, cli.analyze.quiet);

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command);
    }

    // Default: process transcripts
    // Show help if no inputs provided
    if cli.inputs.is_empty() {
        use clap::CommandFactory;
        let mut command = Cli::command();
        command.print_help()?;
        std::process::exit(0);
    }

    // Load configuration
    let config = load_default_config()?;

    process_transcripts(&cli.inputs, &cli.analyze, &config)
}

/// Process input transcript files with the given options.
fn process_transcripts(inputs: &[PathBuf], args: &AnalyzeArgs, config: &Config) -> Result<()> {
    use crate::output::progress;
    use std::time::Instant;

    let total_start = Instant::now();

    // Collect all input files
    let files = collect_input_files(inputs)?;
    if files.is_empty() {
        return Err(Error::NoValidTranscriptFiles);
    }

    info!("Found {} transcript file(s) to process", files.len());

    // Resolve segmentation settings: CLI overrides config overrides defaults
    let segmenter_config = SegmenterConfig {
        min_clip_duration: args
            .min_duration
            .unwrap_or(config.segmenter.min_clip_duration),
        max_clip_duration: args
            .max_duration
            .unwrap_or(config.segmenter.max_clip_duration),
        pause_threshold: args
            .pause_threshold
            .unwrap_or(config.segmenter.pause_threshold),
    };
    validate_segmenter_config(&segmenter_config)?;

    info!(
        "Segmentation: min {:.1}s, max {:.1}s, pause {:.1}s",
        segmenter_config.min_clip_duration,
        segmenter_config.max_clip_duration,
        segmenter_config.pause_threshold
    );

    // Resolve other settings
    let formats = args
        .format
        .clone()
        .unwrap_or_else(|| config.defaults.formats.clone());
    let csv_bom_enabled = !args.no_csv_bom && config.defaults.csv_bom;
    let output_dir = args.output_dir.clone();
    let force = args.force;
    let fail_fast = args.fail_fast;

    // Create file progress bar
    let progress_enabled = !args.quiet && !args.no_progress;
    let file_progress = progress::create_file_progress(files.len(), progress_enabled);

    // Process files
    let mut processed = 0;
    let mut skipped = 0;
    let mut errors = 0;
    let mut total_clips = 0;
    let mut total_segments = 0;

    for file in &files {
        let file_output_dir = output_dir_for(file, output_dir.as_deref());

        // Check if should process
        if let ProcessCheck::SkipExists = should_process(file, &file_output_dir, &formats, force) {
            info!("Skipping (output exists): {}", file.display());
            skipped += 1;
            progress::inc_progress(file_progress.as_ref());
            continue;
        }

        // Process the file
        match process_file(
            file,
            &file_output_dir,
            &segmenter_config,
            &formats,
            csv_bom_enabled,
        ) {
            Ok(result) => {
                processed += 1;
                total_clips += result.clips;
                total_segments += result.segments;
            }
            Err(e) => {
                error!("Failed to process {}: {}", file.display(), e);
                errors += 1;
                if fail_fast {
                    progress::finish_progress(file_progress, "Failed");
                    return Err(e);
                }
            }
        }
        progress::inc_progress(file_progress.as_ref());
    }

    progress::finish_progress(file_progress, "Complete");

    // Summary
    let total_duration = total_start.elapsed().as_secs_f64();
    info!(
        "Complete: {} processed, {} skipped, {} errors, {} clips from {} segments in {:.2}s",
        processed, skipped, errors, total_clips, total_segments, total_duration
    );

    if errors > 0 && !fail_fast {
        warn!("{} file(s) had errors", errors);
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Build filter string based on verbosity level.
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
    }
}

#[allow(clippy::print_stdout)]
fn handle_config_command(action: cli::ConfigAction) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}
