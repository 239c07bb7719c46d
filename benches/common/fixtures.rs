// ABOUTME: Benchmark fixtures generating synthetic four-limb climbing sessions
// ABOUTME: Fixed seed and start time keep measurements reproducible across runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures.

use chrono::{DateTime, TimeZone, Utc};
use climb_core::Series;
use climb_motion::synthetic::SyntheticSession;

/// Seed shared by all fixtures
const BENCH_SEED: u64 = 0x00C1_1AB5;

/// Predefined session lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SessionLength {
    /// One minute - a single boulder problem
    Short,
    /// Ten minutes - a long route
    Long,
}

impl SessionLength {
    /// Recording length in seconds
    #[must_use]
    pub const fn seconds(self) -> f64 {
        match self {
            Self::Short => 60.0,
            Self::Long => 600.0,
        }
    }

    /// Label used in benchmark ids
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Short => "1min",
            Self::Long => "10min",
        }
    }
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Four limb series at 50 Hz with one synchronized fall halfway through
#[must_use]
pub fn generate_session(length: SessionLength) -> Vec<Series> {
    SyntheticSession::new(start(), BENCH_SEED)
        .with_duration(length.seconds())
        .with_fall_at(length.seconds() / 2.0)
        .generate()
}
