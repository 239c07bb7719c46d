// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and synthetic series builders on a fixed clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation
)]
//! Shared test utilities for `climb_motion`
//!
//! Series are built on a fixed start time with exact microsecond spacing so
//! sample-rate estimation and window lengths are deterministic.

use chrono::{DateTime, Duration, TimeZone, Utc};
use climb_core::{Limb, Sample, Series, Vec3};
use climb_motion::loader::SeriesLoader;
use std::env;
use std::path::Path;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Session start shared by all fixtures
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
}

/// Timestamp of sample `index` at `rate_hz`
pub fn time_at(index: usize, rate_hz: f64) -> DateTime<Utc> {
    let period_micros = (1_000_000.0 / rate_hz).round() as i64;
    base_time() + Duration::microseconds(period_micros * index as i64)
}

/// Resting gravity reading
pub const fn gravity() -> Vec3 {
    Vec3::new(0.0, 0.0, 1.0)
}

/// Acceleration along z with the given magnitude
pub const fn accel_z(magnitude: f64) -> Vec3 {
    Vec3::new(0.0, 0.0, magnitude)
}

/// Series from explicit (accel, gyro) readings at a fixed rate
pub fn series_from(limb: Limb, rate_hz: f64, readings: &[(Vec3, Vec3)]) -> Series {
    let samples = readings
        .iter()
        .enumerate()
        .map(|(i, &(accel, gyro))| Sample::new(time_at(i, rate_hz), accel, gyro))
        .collect();
    Series::new(limb, samples)
}

/// Series whose every sample carries the same reading
pub fn constant_series(limb: Limb, len: usize, rate_hz: f64, accel: Vec3, gyro: Vec3) -> Series {
    series_from(limb, rate_hz, &vec![(accel, gyro); len])
}

/// Series from acceleration magnitudes along z with zero rotation
pub fn series_from_magnitudes(limb: Limb, rate_hz: f64, magnitudes: &[f64]) -> Series {
    let readings: Vec<(Vec3, Vec3)> = magnitudes
        .iter()
        .map(|&m| (accel_z(m), Vec3::default()))
        .collect();
    series_from(limb, rate_hz, &readings)
}

/// Resting series with `accel_z(magnitude)` spikes at the given sample indices
pub fn series_with_spikes(
    limb: Limb,
    len: usize,
    rate_hz: f64,
    magnitude: f64,
    spikes: &[usize],
) -> Series {
    let magnitudes: Vec<f64> = (0..len)
        .map(|i| if spikes.contains(&i) { magnitude } else { 1.0 })
        .collect();
    series_from_magnitudes(limb, rate_hz, &magnitudes)
}

/// Write every series into `<dir>/<limb>.csv`
pub fn write_session(dir: &Path, series: &[Series]) {
    for s in series {
        SeriesLoader::write_session_file(dir, s).unwrap();
    }
}
