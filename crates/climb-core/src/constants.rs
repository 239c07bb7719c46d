// ABOUTME: Shared constants for sensor conventions, sentinels, and display precision
// ABOUTME: Groups values by domain so detectors and reports agree on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants organized by domain.

/// Physical conventions of the sensor data
pub mod sensor {
    /// Resting magnitude of gravity-normalized acceleration (1 g)
    pub const NOMINAL_RESTING_MAGNITUDE: f64 = 1.0;

    /// Rate reported when a series is too short or degenerate to estimate one (Hz)
    pub const FALLBACK_SAMPLE_RATE_HZ: f64 = 1.0;
}

/// Persisted series format
pub mod format {
    /// Timestamp column header
    pub const TIMESTAMP_COLUMN: &str = "timestamp";

    /// Required acceleration column headers
    pub const ACCEL_COLUMNS: [&str; 3] = ["accX", "accY", "accZ"];

    /// Required angular velocity column headers
    pub const GYRO_COLUMNS: [&str; 3] = ["gyroX", "gyroY", "gyroZ"];

    /// Optional magnetometer column headers
    pub const MAG_COLUMNS: [&str; 3] = ["magX", "magY", "magZ"];
}

/// Output rounding, chosen for display stability
pub mod precision {
    /// Decimals for time intervals (seconds)
    pub const INTERVAL_DECIMALS: u32 = 3;

    /// Decimals for ratios in [0, 1]
    pub const RATIO_DECIMALS: u32 = 2;

    /// Decimals for percentage-scale scores in [0, 100]
    pub const PERCENT_DECIMALS: u32 = 1;

    /// Decimals for estimated sample rates (Hz) and jerk magnitudes
    pub const RATE_DECIMALS: u32 = 2;
}
