// ABOUTME: Integration tests for movement onset debouncing and cross-limb rhythm statistics
// ABOUTME: Validates the inclusive pause boundary, merge without re-debounce, and undefined rhythm
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use climb_core::Limb;
use climb_intelligence::config::RhythmConfig;
use climb_intelligence::RhythmAnalyzer;
use common::{series_with_spikes, time_at};
use serde_json::Value;

const RATE: f64 = 50.0;

fn analyzer() -> RhythmAnalyzer {
    RhythmAnalyzer::new(RhythmConfig::default())
}

#[test]
fn test_onsets_are_debounced_per_limb() {
    common::init_test_logging();
    // 0 s, 0.2 s (suppressed), 0.5 s (exactly one pause later), 1.0 s
    let series = series_with_spikes(Limb::LeftArm, 100, RATE, 3.0, &[0, 10, 25, 50]);
    let onsets = analyzer().detect_onsets(&series);

    let times: Vec<_> = onsets.iter().map(|e| e.timestamp).collect();
    assert_eq!(times, vec![time_at(0, RATE), time_at(25, RATE), time_at(50, RATE)]);
    assert!(onsets.iter().all(|e| e.limb == Limb::LeftArm));
}

#[test]
fn test_sustained_movement_yields_one_onset_per_pause() {
    // Above threshold for a full second at 50 Hz
    let spikes: Vec<usize> = (0..50).collect();
    let series = series_with_spikes(Limb::RightLeg, 60, RATE, 3.0, &spikes);
    let onsets = analyzer().detect_onsets(&series);
    assert_eq!(onsets.len(), 2);
    assert_eq!(onsets[1].timestamp, time_at(25, RATE));
}

#[test]
fn test_threshold_is_strict() {
    let series = series_with_spikes(Limb::LeftLeg, 60, RATE, 2.5, &[5, 40]);
    assert!(analyzer().detect_onsets(&series).is_empty());
}

#[test]
fn test_merged_onsets_are_not_debounced_again() {
    let left = series_with_spikes(Limb::LeftArm, 60, RATE, 3.0, &[0, 50]);
    let right = series_with_spikes(Limb::RightArm, 60, RATE, 3.0, &[5]);

    let (onsets, stats) = analyzer().analyze([&left, &right]);
    let stats = stats.unwrap();

    assert_eq!(onsets.len(), 3);
    assert_eq!(onsets[1].limb, Limb::RightArm);
    assert_eq!(stats.onset_count, 3);
    assert!((stats.mean_interval - 0.5).abs() < 1e-9);
    assert!((stats.std_interval - 0.4).abs() < 1e-9);
    assert!((stats.rhythm_score - 0.8).abs() < 1e-9);
}

#[test]
fn test_fewer_than_two_onsets_is_undefined() {
    let single = series_with_spikes(Limb::LeftArm, 60, RATE, 3.0, &[10]);
    let quiet = series_with_spikes(Limb::RightArm, 60, RATE, 3.0, &[]);

    let (onsets, stats) = analyzer().analyze([&single, &quiet]);
    assert_eq!(onsets.len(), 1);
    assert!(stats.is_none());
}

#[test]
fn test_simultaneous_onsets_give_infinite_score() {
    let left = series_with_spikes(Limb::LeftArm, 10, RATE, 3.0, &[3]);
    let right = series_with_spikes(Limb::RightArm, 10, RATE, 3.0, &[3]);

    let (onsets, stats) = analyzer().analyze([&right, &left]);
    let stats = stats.unwrap();

    // Ties resolve in canonical limb order regardless of input order
    assert_eq!(onsets[0].limb, Limb::LeftArm);
    assert!(stats.mean_interval.abs() < f64::EPSILON);
    assert!(stats.rhythm_score.is_infinite());

    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["rhythm_score"], Value::Null);
}

#[test]
fn test_regular_cadence_scores_zero() {
    let seconds = [0.0, 2.0, 4.0, 6.0];
    let stats = RhythmAnalyzer::analyze_intervals(&seconds).unwrap();
    assert!((stats.mean_interval - 2.0).abs() < f64::EPSILON);
    assert!(stats.rhythm_score.abs() < f64::EPSILON);
}
