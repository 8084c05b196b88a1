//! VCDS CLI - Command-line tool for VCDS scan transcripts
//!
//! Parses auto-scan transcripts into JSON records, cleans measurement exports
//! and renders Markdown reports.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "vcds")]
#[command(author, version, about = "VCDS scan parser and report tool")]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VCDS_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse scan transcript(s) into diagnostic records
    Parse {
        /// Transcript file(s)
        files: Vec<PathBuf>,

        /// Write one <name>.json per transcript into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Report skipped address sections and fault count mismatches
        #[arg(long)]
        diagnostics: bool,
    },

    /// Clean raw measurement exports (*.csv)
    Clean {
        /// Directory with raw exports
        #[arg(long)]
        input_dir: Option<PathBuf>,

        /// Directory for cleaned tables
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Render a Markdown report
    Report {
        /// Vehicle configuration (YAML)
        #[arg(long)]
        vehicle: Option<PathBuf>,

        /// Directory with cleaned tables
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Diagnostic record (JSON) to include
        #[arg(long)]
        record: Option<PathBuf>,

        /// Report file path
        #[arg(long)]
        out: Option<PathBuf>,

        /// Comment for the report's comment section
        #[arg(long)]
        comment: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(cli.output, cli.no_color);

    // Create output context
    let ctx = OutputContext::new(merged.output, merged.no_color, cli.quiet);

    // Execute command
    match cli.command {
        Commands::Parse {
            files,
            out_dir,
            diagnostics,
        } => {
            commands::parse(&files, out_dir.as_deref(), diagnostics, &ctx)?;
        }

        Commands::Clean {
            input_dir,
            output_dir,
        } => {
            let input_dir = input_dir.unwrap_or_else(|| merged.input_dir.clone());
            let output_dir = output_dir.unwrap_or_else(|| merged.data_dir.clone());
            commands::clean(&input_dir, &output_dir, &ctx)?;
        }

        Commands::Report {
            vehicle,
            data_dir,
            record,
            out,
            comment,
        } => {
            let options = commands::ReportOptions {
                vehicle,
                data_dir: data_dir.unwrap_or_else(|| merged.data_dir.clone()),
                record,
                out: out.unwrap_or_else(|| merged.report_dir.join("report.md")),
                comment,
            };
            commands::report(&options, &ctx)?;
        }
    }

    Ok(())
}
