// ABOUTME: Configuration-driven parameters for the motion analytics engine replacing magic numbers
// ABOUTME: Provides type-safe, environment- and file-configurable parameters for every detector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis Configuration
//!
//! [`AnalysisConfig`] is passed explicitly to every detector. Values come from
//! defaults, then an optional JSON override file, then `CLIMB_*` environment
//! variables, and are validated once before any analysis starts.

use super::detectors::{
    FallConfig, GripConfig, RhythmConfig, SmoothnessConfig, StabilityConfig, SteadinessConfig,
    StillnessConfig, UsageConfig,
};
use super::error::AnalysisConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Main analysis configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Hold stability scoring
    pub stability: StabilityConfig,
    /// Grip counting
    pub grip: GripConfig,
    /// Whole-series window steadiness
    pub steadiness: SteadinessConfig,
    /// Jerk-based smoothness
    pub smoothness: SmoothnessConfig,
    /// Movement rhythm
    pub rhythm: RhythmConfig,
    /// Fall detection
    pub falls: FallConfig,
    /// Arm/leg usage balance
    pub usage: UsageConfig,
}

/// Parse `key` from the environment into `target` when set
fn apply_env<T: FromStr>(
    key: &str,
    target: &mut T,
    on_error: fn(String) -> AnalysisConfigError,
) -> Result<(), AnalysisConfigError> {
    if let Ok(val) = env::var(key) {
        *target = val.trim().parse().map_err(|_| on_error(key.to_owned()))?;
    }
    Ok(())
}

impl AnalysisConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn from_environment() -> Result<Self, AnalysisConfigError> {
        let mut config = Self::default();
        config.apply_environment()?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON override file; omitted sections keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn from_json_file(path: &Path) -> Result<Self, AnalysisConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AnalysisConfigError::InvalidFile(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| AnalysisConfigError::InvalidFile(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `CLIMB_*` environment overrides on top of the current values
    ///
    /// # Errors
    ///
    /// Returns an error naming the first variable that fails to parse
    pub fn apply_environment(&mut self) -> Result<(), AnalysisConfigError> {
        use AnalysisConfigError::{InvalidThreshold, InvalidWindow};

        let stability = &mut self.stability;
        apply_env(
            "CLIMB_STABILITY_WINDOW_SECONDS",
            &mut stability.stillness.window_seconds,
            InvalidWindow,
        )?;
        apply_env(
            "CLIMB_STABILITY_ACCEL_TOLERANCE",
            &mut stability.stillness.accel_tolerance,
            InvalidThreshold,
        )?;
        apply_env(
            "CLIMB_STABILITY_GYRO_TOLERANCE",
            &mut stability.stillness.gyro_tolerance,
            InvalidThreshold,
        )?;
        apply_env(
            "CLIMB_STABILITY_MIN_WINDOWS",
            &mut stability.min_consecutive_windows,
            InvalidWindow,
        )?;
        apply_env("CLIMB_HOLD_ACCEL_STD", &mut stability.accel_std_threshold, InvalidThreshold)?;
        apply_env("CLIMB_HOLD_GYRO_STD", &mut stability.gyro_std_threshold, InvalidThreshold)?;

        let grip = &mut self.grip;
        apply_env("CLIMB_GRIP_WINDOW_SECONDS", &mut grip.stillness.window_seconds, InvalidWindow)?;
        apply_env(
            "CLIMB_GRIP_ACCEL_TOLERANCE",
            &mut grip.stillness.accel_tolerance,
            InvalidThreshold,
        )?;
        apply_env(
            "CLIMB_GRIP_GYRO_TOLERANCE",
            &mut grip.stillness.gyro_tolerance,
            InvalidThreshold,
        )?;
        apply_env("CLIMB_GRIP_MIN_WINDOWS", &mut grip.min_consecutive_windows, InvalidWindow)?;

        apply_env(
            "CLIMB_STEADINESS_WINDOW_SECONDS",
            &mut self.steadiness.window_seconds,
            InvalidWindow,
        )?;

        let smoothness = &mut self.smoothness;
        apply_env(
            "CLIMB_SMOOTHNESS_ROLLING_WINDOW",
            &mut smoothness.rolling_window_samples,
            InvalidWindow,
        )?;
        apply_env(
            "CLIMB_SMOOTHNESS_ACCEL_STD",
            &mut smoothness.accel_std_threshold,
            InvalidThreshold,
        )?;
        apply_env(
            "CLIMB_SMOOTHNESS_GYRO_STD",
            &mut smoothness.gyro_std_threshold,
            InvalidThreshold,
        )?;
        apply_env("CLIMB_MAX_EXPECTED_JERK", &mut smoothness.max_expected_jerk, InvalidThreshold)?;

        apply_env(
            "CLIMB_RHYTHM_MOVEMENT_THRESHOLD",
            &mut self.rhythm.movement_threshold,
            InvalidThreshold,
        )?;
        apply_env("CLIMB_RHYTHM_MIN_PAUSE", &mut self.rhythm.min_pause_seconds, InvalidWindow)?;

        apply_env("CLIMB_FALL_THRESHOLD", &mut self.falls.magnitude_threshold, InvalidThreshold)?;
        apply_env("CLIMB_FALL_SYNC_WINDOW", &mut self.falls.sync_window_seconds, InvalidWindow)?;

        apply_env(
            "CLIMB_USAGE_MOVEMENT_THRESHOLD",
            &mut self.usage.movement_threshold,
            InvalidThreshold,
        )?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range
    pub fn validate(&self) -> Result<(), AnalysisConfigError> {
        validate_stillness("stability.stillness", &self.stability.stillness)?;
        validate_stillness("grip.stillness", &self.grip.stillness)?;

        if self.stability.min_consecutive_windows == 0 || self.grip.min_consecutive_windows == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "min_consecutive_windows must be >= 1".into(),
            ));
        }

        require_positive("stability.accel_std_threshold", self.stability.accel_std_threshold)?;
        require_positive("stability.gyro_std_threshold", self.stability.gyro_std_threshold)?;
        require_positive("steadiness.window_seconds", self.steadiness.window_seconds)?;
        require_positive("steadiness.accel_std_threshold", self.steadiness.accel_std_threshold)?;
        require_positive("steadiness.gyro_std_threshold", self.steadiness.gyro_std_threshold)?;

        if self.smoothness.rolling_window_samples < 2 {
            return Err(AnalysisConfigError::ValidationFailed(
                "smoothness.rolling_window_samples must be >= 2".into(),
            ));
        }
        require_positive("smoothness.accel_std_threshold", self.smoothness.accel_std_threshold)?;
        require_positive("smoothness.gyro_std_threshold", self.smoothness.gyro_std_threshold)?;
        require_positive("smoothness.max_expected_jerk", self.smoothness.max_expected_jerk)?;
        require_positive("smoothness.jerk_clip_max", self.smoothness.jerk_clip_max)?;
        if self.smoothness.min_time_delta_seconds < 0.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "smoothness.min_time_delta_seconds must be >= 0".into(),
            ));
        }

        require_positive("rhythm.movement_threshold", self.rhythm.movement_threshold)?;
        if self.rhythm.min_pause_seconds < 0.0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "rhythm.min_pause_seconds must be >= 0".into(),
            ));
        }

        require_positive("falls.magnitude_threshold", self.falls.magnitude_threshold)?;
        require_positive("falls.sync_window_seconds", self.falls.sync_window_seconds)?;

        require_positive("usage.movement_threshold", self.usage.movement_threshold)?;
        let usage = &self.usage;
        if !(0.0..=1.0).contains(&usage.arm_dominant_below)
            || !(0.0..=1.0).contains(&usage.leg_dominant_above)
            || usage.arm_dominant_below > usage.leg_dominant_above
        {
            let (arm, leg) = (usage.arm_dominant_below, usage.leg_dominant_above);
            return Err(AnalysisConfigError::ValidationFailed(format!(
                "usage bands need 0 <= arm_dominant_below {arm} <= leg_dominant_above {leg} <= 1"
            )));
        }

        Ok(())
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), AnalysisConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AnalysisConfigError::ValidationFailed(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

fn validate_stillness(name: &str, stillness: &StillnessConfig) -> Result<(), AnalysisConfigError> {
    require_positive(&format!("{name}.window_seconds"), stillness.window_seconds)?;
    require_positive(&format!("{name}.accel_tolerance"), stillness.accel_tolerance)?;
    require_positive(&format!("{name}.gyro_tolerance"), stillness.gyro_tolerance)
}
