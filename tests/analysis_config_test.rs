// ABOUTME: Unit tests for analysis configuration defaults, override files, and validation
// ABOUTME: Validates partial JSON overrides keep defaults and out-of-range values are rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use climb_core::{AppError, ErrorCode};
use climb_intelligence::config::{AnalysisConfig, AnalysisConfigError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults_are_valid() {
    let config = AnalysisConfig::default();
    assert!(config.validate().is_ok());

    assert!((config.stability.stillness.window_seconds - 0.25).abs() < f64::EPSILON);
    assert!((config.stability.stillness.accel_tolerance - 1.0).abs() < f64::EPSILON);
    assert!((config.grip.stillness.accel_tolerance - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.stability.min_consecutive_windows, 3);
    assert_eq!(config.smoothness.rolling_window_samples, 10);
    assert!((config.rhythm.movement_threshold - 2.5).abs() < f64::EPSILON);
    assert!((config.falls.magnitude_threshold - 10.0).abs() < f64::EPSILON);
    assert!((config.usage.arm_dominant_below - 0.3).abs() < f64::EPSILON);
}

#[test]
fn test_partial_override_file_keeps_other_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("thresholds.json");
    fs::write(
        &path,
        r#"{ "rhythm": { "min_pause_seconds": 1.0 }, "falls": { "magnitude_threshold": 8.0 } }"#,
    )
    .unwrap();

    let config = AnalysisConfig::from_json_file(&path).unwrap();

    assert!((config.rhythm.min_pause_seconds - 1.0).abs() < f64::EPSILON);
    assert!((config.rhythm.movement_threshold - 2.5).abs() < f64::EPSILON);
    assert!((config.falls.magnitude_threshold - 8.0).abs() < f64::EPSILON);
    assert!((config.falls.sync_window_seconds - 0.5).abs() < f64::EPSILON);
    assert_eq!(config.grip, AnalysisConfig::default().grip);
}

#[test]
fn test_unparseable_override_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let error = AnalysisConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(error, AnalysisConfigError::InvalidFile(_)));
}

#[test]
fn test_missing_override_file() {
    let dir = TempDir::new().unwrap();
    let error = AnalysisConfig::from_json_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(error, AnalysisConfigError::InvalidFile(_)));
}

#[test]
fn test_override_file_is_validated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "smoothness": { "rolling_window_samples": 1 } }"#).unwrap();

    let error = AnalysisConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(error, AnalysisConfigError::ValidationFailed(_)));
}

#[test]
fn test_inverted_usage_bands_rejected() {
    let mut config = AnalysisConfig::default();
    config.usage.arm_dominant_below = 0.7;
    config.usage.leg_dominant_above = 0.4;
    assert!(matches!(
        config.validate(),
        Err(AnalysisConfigError::ValidationFailed(_))
    ));
}

#[test]
fn test_zero_hold_length_rejected() {
    let mut config = AnalysisConfig::default();
    config.grip.min_consecutive_windows = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_non_finite_thresholds_rejected() {
    let mut config = AnalysisConfig::default();
    config.stability.stillness.window_seconds = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = AnalysisConfig::default();
    config.smoothness.max_expected_jerk = f64::INFINITY;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_error_maps_to_config_invalid() {
    let error: AppError = AnalysisConfigError::ValidationFailed("bad".into()).into();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("bad"));
}
