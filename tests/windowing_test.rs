// ABOUTME: Integration tests for sample-rate estimation, window partitioning, and stillness labels
// ABOUTME: Validates window sizing at common rates, remainder dropping, and dual-threshold stillness
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use climb_core::{Limb, Vec3};
use climb_intelligence::config::StillnessConfig;
use climb_intelligence::{partition, window_len, SampleRate, StillnessClassifier};
use common::{accel_z, constant_series, gravity, series_from};

#[test]
fn test_rate_estimated_from_exact_spacing() {
    for hz in [25.0, 50.0, 100.0] {
        let series = constant_series(Limb::LeftArm, 200, hz, gravity(), Vec3::default());
        let rate = SampleRate::of_series(&series);
        assert!((rate.hz() - hz).abs() < 1e-9, "expected {hz}, got {}", rate.hz());
    }
}

#[test]
fn test_rate_falls_back_for_single_sample() {
    let series = constant_series(Limb::LeftArm, 1, 50.0, gravity(), Vec3::default());
    assert!((SampleRate::of_series(&series).hz() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_window_len_floors_duration_times_rate() {
    assert_eq!(window_len(0.25, SampleRate::from_hz(50.0)), 12);
    assert_eq!(window_len(0.25, SampleRate::from_hz(100.0)), 25);
    assert_eq!(window_len(0.5, SampleRate::from_hz(50.0)), 25);
    assert_eq!(window_len(0.25, SampleRate::from_hz(2.0)), 1);
}

#[test]
fn test_partition_drops_trailing_remainder() {
    let series = constant_series(Limb::RightLeg, 60, 50.0, gravity(), Vec3::default());
    let windows = partition(series.samples(), 0.25, SampleRate::of_series(&series));

    assert_eq!(windows.len(), 5);
    assert!(windows.iter().all(|w| w.samples().len() == 12));
    assert_eq!(windows.last().unwrap().offset(), 48);
}

#[test]
fn test_resting_window_is_still() {
    common::init_test_logging();
    let series = constant_series(Limb::LeftArm, 48, 50.0, gravity(), Vec3::default());
    let classifier = StillnessClassifier::new(StillnessConfig::stability_defaults());
    let (windows, labels) = classifier.label_series(&series, SampleRate::of_series(&series));

    assert_eq!(windows.len(), 4);
    assert_eq!(labels, vec![true; 4]);
}

#[test]
fn test_unit_magnitudes_are_still_for_any_positive_tolerance() {
    let series = constant_series(
        Limb::RightArm,
        48,
        50.0,
        gravity(),
        Vec3::new(1.0, 0.0, 0.0),
    );
    let classifier = StillnessClassifier::new(StillnessConfig {
        window_seconds: 0.25,
        accel_tolerance: 1e-6,
        gyro_tolerance: 1e-6,
    });
    let (windows, labels) = classifier.label_series(&series, SampleRate::of_series(&series));

    assert_eq!(windows.len(), 4);
    assert_eq!(labels, vec![true; 4]);
}

#[test]
fn test_acceleration_deviation_breaks_stillness() {
    let series = constant_series(Limb::LeftArm, 48, 50.0, accel_z(2.2), Vec3::default());
    let classifier = StillnessClassifier::new(StillnessConfig::stability_defaults());
    let (_, labels) = classifier.label_series(&series, SampleRate::of_series(&series));
    assert_eq!(labels, vec![false; 4]);
}

#[test]
fn test_rotation_breaks_stillness() {
    let series = constant_series(
        Limb::LeftArm,
        48,
        50.0,
        gravity(),
        Vec3::new(60.0, 0.0, 0.0),
    );
    let classifier = StillnessClassifier::new(StillnessConfig::stability_defaults());
    let (_, labels) = classifier.label_series(&series, SampleRate::of_series(&series));
    assert_eq!(labels, vec![false; 4]);
}

#[test]
fn test_grip_parameters_are_tighter_than_stability() {
    let readings: Vec<(Vec3, Vec3)> = [1.15; 12]
        .iter()
        .chain([1.25; 12].iter())
        .map(|&m| (accel_z(m), Vec3::default()))
        .collect();
    let series = series_from(Limb::RightArm, 50.0, &readings);
    let rate = SampleRate::of_series(&series);

    let loose = StillnessClassifier::new(StillnessConfig::stability_defaults());
    let tight = StillnessClassifier::new(StillnessConfig::grip_defaults());

    assert_eq!(loose.label_series(&series, rate).1, vec![true, true]);
    assert_eq!(tight.label_series(&series, rate).1, vec![true, false]);
}

#[test]
fn test_single_sample_window_follows_its_own_deviation() {
    let readings = [(accel_z(2.5), Vec3::default()), (gravity(), Vec3::default())];
    let series = series_from(Limb::LeftLeg, 2.0, &readings);
    let rate = SampleRate::of_series(&series);
    let classifier = StillnessClassifier::new(StillnessConfig::stability_defaults());

    assert_eq!(window_len(0.25, rate), 1);
    assert_eq!(classifier.label_series(&series, rate).1, vec![false, true]);
}
