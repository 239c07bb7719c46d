// ABOUTME: Synthetic session seeder writing four limb CSV recordings for demos without sensors
// ABOUTME: Generates hold and reach phases with noise and an optional synchronized fall
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic session seeder.
//!
//! Usage:
//! ```bash
//! # One minute at 50 Hz into ./sessions/demo
//! cargo run --bin seed-synthetic-session -- ./sessions/demo
//!
//! # Five minutes at 100 Hz with a fall two minutes in
//! cargo run --bin seed-synthetic-session -- ./sessions/fall --duration 300 --rate 100 --fall-at 120
//!
//! # Reproducible noise
//! cargo run --bin seed-synthetic-session -- ./sessions/demo --seed 42
//! ```

use chrono::{DateTime, SubsecRound, Utc};
use clap::Parser;
use climb_motion::errors::AppError;
use climb_motion::loader::{parse_timestamp, SeriesLoader};
use climb_motion::synthetic::SyntheticSession;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::info;

/// CLI-specific error type for the seed binary
#[derive(Error, Debug)]
enum SeedError {
    #[error("Storage error: {0}")]
    Storage(#[from] AppError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Validation(String),
}

type SeedResult<T> = Result<T, SeedError>;

#[derive(Parser)]
#[command(
    name = "seed-synthetic-session",
    about = "Synthetic climbing session seeder",
    long_about = "Write left_arm.csv, right_arm.csv, left_leg.csv and right_leg.csv with realistic synthetic motion"
)]
struct SeedArgs {
    /// Session directory to create or overwrite
    session_dir: PathBuf,

    /// Recording length in seconds
    #[arg(long, default_value = "60")]
    duration: f64,

    /// Sample rate in Hz
    #[arg(long, default_value = "50")]
    rate: f64,

    /// Seconds after start at which all four limbs register a fall
    #[arg(long)]
    fall_at: Option<f64>,

    /// First timestamp (RFC 3339 or naive ISO-8601); defaults to now
    #[arg(long)]
    start: Option<String>,

    /// Random seed for reproducible data (optional)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn validate(args: &SeedArgs) -> SeedResult<DateTime<Utc>> {
    if !(args.duration.is_finite() && args.duration > 0.0) {
        return Err(SeedError::Validation(format!(
            "duration must be positive, got {}",
            args.duration
        )));
    }
    if !(args.rate.is_finite() && args.rate > 0.0) {
        return Err(SeedError::Validation(format!(
            "rate must be positive, got {}",
            args.rate
        )));
    }
    if let Some(at) = args.fall_at {
        if !(0.0..args.duration).contains(&at) {
            return Err(SeedError::Validation(format!(
                "fall time {at} is outside the recording"
            )));
        }
    }
    match &args.start {
        Some(raw) => parse_timestamp(raw)
            .ok_or_else(|| SeedError::Validation(format!("unparseable start time: {raw}"))),
        None => Ok(Utc::now().trunc_subsecs(0)),
    }
}

fn main() -> SeedResult<()> {
    let args = SeedArgs::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let start = validate(&args)?;
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(12345)
    });

    info!("Climb synthetic session seeder");
    info!("   Directory: {}", args.session_dir.display());
    info!("   Duration: {} s at {} Hz", args.duration, args.rate);
    info!("   Random seed: {}", seed);

    let mut session = SyntheticSession::new(start, seed)
        .with_duration(args.duration)
        .with_rate(args.rate);
    if let Some(at) = args.fall_at {
        info!("   Fall injected at {} s", at);
        session = session.with_fall_at(at);
    }

    fs::create_dir_all(&args.session_dir)?;
    for series in session.generate() {
        let path = SeriesLoader::write_session_file(&args.session_dir, &series)?;
        info!("   Wrote {} samples to {}", series.len(), path.display());
    }

    info!("Session ready: climb-motion analyze {}", args.session_dir.display());
    Ok(())
}
