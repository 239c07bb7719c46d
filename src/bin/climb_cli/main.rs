// ABOUTME: climb-motion CLI - analyzes recorded climbing sessions from four limb sensors
// ABOUTME: Handles session analysis, single-series inspection, and effective configuration display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze a session directory and print the JSON bundle
//! climb-motion analyze ./sessions/2025-03-01
//!
//! # Text report with a partial JSON override file
//! climb-motion analyze ./sessions/2025-03-01 --config tight-grips.json --format pretty
//!
//! # Write the bundle to a file
//! climb-motion analyze ./sessions/2025-03-01 --output metrics.json
//!
//! # Loader statistics and sample rate of one series
//! climb-motion inspect ./sessions/2025-03-01/left_arm.csv
//!
//! # Print the effective configuration (defaults + file + CLIMB_* overrides)
//! climb-motion config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use climb_motion::logging::LoggingConfig;
use climb_motion::models::Limb;
use climb_motion::report::ReportFormat;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "climb-motion",
    about = "Climbing session motion analytics",
    long_about = "Derives hold stability, grips, smoothness, rhythm, limb usage, and falls from four body-worn inertial sensor recordings."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze a session directory holding one CSV file per limb
    Analyze {
        /// Directory with left_arm.csv, right_arm.csv, left_leg.csv, right_leg.csv
        session_dir: PathBuf,

        /// Partial or full JSON configuration override file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show loader statistics and the estimated sample rate of one series file
    Inspect {
        /// Series CSV file
        file: PathBuf,

        /// Limb the file belongs to (defaults to the file name, e.g. left_arm.csv)
        #[arg(long)]
        limb: Option<Limb>,
    },

    /// Print the effective analysis configuration as JSON
    Config {
        /// Partial or full JSON configuration override file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => Self::Json,
            OutputFormat::Pretty => Self::Pretty,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;
    debug!("climb-motion CLI");

    match cli.command {
        Command::Analyze {
            session_dir,
            config,
            format,
            output,
        } => commands::analyze::run(
            &session_dir,
            config.as_deref(),
            format.into(),
            output.as_deref(),
        )?,
        Command::Inspect { file, limb } => commands::inspect::run(&file, limb)?,
        Command::Config { config } => commands::config::run(config.as_deref())?,
    }

    Ok(())
}
