// ABOUTME: Per-detector parameter records for stillness, holds, jerk, rhythm, falls, and usage
// ABOUTME: Each record carries its own defaults so partial override files stay valid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Detector Configuration
//!
//! One record per detector. The stillness classifier is parametrized by a single
//! [`StillnessConfig`] shape that is instantiated twice: a loose set for hold
//! stability and a tight set for grip counting.

use serde::{Deserialize, Serialize};

/// Dual-threshold stillness test over fixed-duration windows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StillnessConfig {
    /// Window duration in seconds
    pub window_seconds: f64,
    /// Maximum mean |accel magnitude - 1 g| for a still window
    pub accel_tolerance: f64,
    /// Maximum mean |gyro magnitude - 1| for a still window
    pub gyro_tolerance: f64,
}

impl StillnessConfig {
    /// Loose parameters used when scoring hold stability
    #[must_use]
    pub const fn stability_defaults() -> Self {
        Self {
            window_seconds: 0.25,
            accel_tolerance: 1.0,
            gyro_tolerance: 50.0,
        }
    }

    /// Tight parameters used when counting grips
    #[must_use]
    pub const fn grip_defaults() -> Self {
        Self {
            window_seconds: 0.25,
            accel_tolerance: 0.2,
            gyro_tolerance: 50.0,
        }
    }
}

/// Hold stability scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityConfig {
    /// Stillness classifier parameters
    pub stillness: StillnessConfig,
    /// Minimum consecutive still windows forming a hold
    pub min_consecutive_windows: usize,
    /// Per-axis acceleration std a stable hold window must stay below
    pub accel_std_threshold: f64,
    /// Per-axis angular velocity std a stable hold window must stay below
    pub gyro_std_threshold: f64,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            stillness: StillnessConfig::stability_defaults(),
            min_consecutive_windows: 3,
            accel_std_threshold: 0.12,
            gyro_std_threshold: 30.0,
        }
    }
}

/// Grip counting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GripConfig {
    /// Stillness classifier parameters
    pub stillness: StillnessConfig,
    /// Minimum consecutive still windows forming a grip
    pub min_consecutive_windows: usize,
}

impl Default for GripConfig {
    fn default() -> Self {
        Self {
            stillness: StillnessConfig::grip_defaults(),
            min_consecutive_windows: 3,
        }
    }
}

/// Whole-series steadiness: strict per-axis std test over every window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteadinessConfig {
    /// Window duration in seconds
    pub window_seconds: f64,
    /// Per-axis acceleration std threshold
    pub accel_std_threshold: f64,
    /// Per-axis angular velocity std threshold
    pub gyro_std_threshold: f64,
}

impl Default for SteadinessConfig {
    fn default() -> Self {
        Self {
            window_seconds: 0.5,
            accel_std_threshold: 0.02,
            gyro_std_threshold: 0.05,
        }
    }
}

/// Jerk-based smoothness scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothnessConfig {
    /// Trailing window (samples) for the rolling standard deviation
    pub rolling_window_samples: usize,
    /// Rolling accel-magnitude std above which a sample is moving
    pub accel_std_threshold: f64,
    /// Rolling gyro-magnitude std above which a sample is moving
    pub gyro_std_threshold: f64,
    /// Time deltas at or below this (seconds) are discarded as timestamp noise
    pub min_time_delta_seconds: f64,
    /// Upper clip applied to per-interval jerk before the median
    pub jerk_clip_max: f64,
    /// Jerk that maps to a score of 0
    pub max_expected_jerk: f64,
}

impl Default for SmoothnessConfig {
    fn default() -> Self {
        Self {
            rolling_window_samples: 10,
            accel_std_threshold: 0.8,
            gyro_std_threshold: 8.0,
            min_time_delta_seconds: 0.01,
            jerk_clip_max: 1000.0,
            max_expected_jerk: 1000.0,
        }
    }
}

/// Movement-onset detection for rhythm analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RhythmConfig {
    /// Acceleration magnitude that marks a movement onset
    pub movement_threshold: f64,
    /// Debounce: minimum seconds between onsets of the same limb
    pub min_pause_seconds: f64,
}

impl Default for RhythmConfig {
    fn default() -> Self {
        Self {
            movement_threshold: 2.5,
            min_pause_seconds: 0.5,
        }
    }
}

/// Partial and full fall detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallConfig {
    /// Acceleration magnitude (g) above which a sample is a partial fall
    pub magnitude_threshold: f64,
    /// Seconds within which all four limbs must register a partial fall
    pub sync_window_seconds: f64,
}

impl Default for FallConfig {
    fn default() -> Self {
        Self {
            magnitude_threshold: 10.0,
            sync_window_seconds: 0.5,
        }
    }
}

/// Arm versus leg usage balance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageConfig {
    /// Consecutive-sample magnitude delta counted as a movement
    pub movement_threshold: f64,
    /// Leg ratio strictly below this is arm-dominant
    pub arm_dominant_below: f64,
    /// Leg ratio strictly above this is leg-dominant
    pub leg_dominant_above: f64,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self {
            movement_threshold: 0.8,
            arm_dominant_below: 0.3,
            leg_dominant_above: 0.6,
        }
    }
}
