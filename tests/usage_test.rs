// ABOUTME: Integration tests for arm versus leg movement counting and balance classification
// ABOUTME: Validates band boundaries, rounding of reported ratios, and sessions without movement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use climb_core::Limb;
use climb_intelligence::config::UsageConfig;
use climb_intelligence::{UsageAggregator, UsageBalance};
use common::series_from_magnitudes;
use std::collections::BTreeMap;

fn aggregator() -> UsageAggregator {
    UsageAggregator::new(UsageConfig::default())
}

fn counts(
    left_arm: usize,
    right_arm: usize,
    left_leg: usize,
    right_leg: usize,
) -> BTreeMap<Limb, usize> {
    BTreeMap::from([
        (Limb::LeftArm, left_arm),
        (Limb::RightArm, right_arm),
        (Limb::LeftLeg, left_leg),
        (Limb::RightLeg, right_leg),
    ])
}

#[test]
fn test_movements_are_large_consecutive_deltas() {
    let series = series_from_magnitudes(Limb::LeftArm, 50.0, &[1.0, 2.0, 2.0, 1.0, 1.5, 0.6]);
    // Deltas 1.0, 0.0, 1.0, 0.5, 0.9
    assert_eq!(aggregator().count_movements(&series), 3);
}

#[test]
fn test_short_series_has_no_movements() {
    let series = series_from_magnitudes(Limb::LeftArm, 50.0, &[5.0]);
    assert_eq!(aggregator().count_movements(&series), 0);
}

#[test]
fn test_band_edges_are_balanced() {
    let aggregator = aggregator();
    assert_eq!(aggregator.classify(0.3), UsageBalance::Balanced);
    assert_eq!(aggregator.classify(0.6), UsageBalance::Balanced);
    assert_eq!(aggregator.classify(0.29), UsageBalance::ArmDominant);
    assert_eq!(aggregator.classify(0.61), UsageBalance::LegDominant);
}

#[test]
fn test_arm_heavy_session() {
    let summary = aggregator().summarize(&counts(5, 4, 1, 0));

    assert_eq!(summary.arm_movements, 9);
    assert_eq!(summary.leg_movements, 1);
    assert!((summary.arm_usage_ratio - 0.9).abs() < f64::EPSILON);
    assert!((summary.leg_usage_ratio - 0.1).abs() < f64::EPSILON);
    assert_eq!(summary.balance, UsageBalance::ArmDominant);
    assert_eq!(summary.comment, "Climber overuses arms and underuses legs");
}

#[test]
fn test_leg_share_of_exactly_thirty_percent_is_balanced() {
    let summary = aggregator().summarize(&counts(4, 3, 2, 1));
    assert_eq!(summary.balance, UsageBalance::Balanced);
    assert_eq!(summary.comment, "Balanced use of arms and legs");
}

#[test]
fn test_leg_heavy_session() {
    let summary = aggregator().summarize(&counts(1, 1, 3, 3));
    assert_eq!(summary.balance, UsageBalance::LegDominant);
    assert!((summary.leg_usage_ratio - 0.75).abs() < f64::EPSILON);
    assert_eq!(
        summary.comment,
        "Climber uses legs more actively than arms, good technique"
    );
}

#[test]
fn test_reported_ratios_are_rounded_but_sum_to_one() {
    let summary = aggregator().summarize(&counts(1, 1, 1, 0));
    assert!((summary.arm_usage_ratio - 0.67).abs() < f64::EPSILON);
    assert!((summary.leg_usage_ratio - 0.33).abs() < f64::EPSILON);
}

#[test]
fn test_no_movement_at_all() {
    let summary = aggregator().summarize(&counts(0, 0, 0, 0));

    assert_eq!(summary.balance, UsageBalance::NoMovement);
    assert!(summary.arm_usage_ratio.abs() < f64::EPSILON);
    assert!(summary.leg_usage_ratio.abs() < f64::EPSILON);
    assert_eq!(summary.comment, "No significant movement detected");
}

#[test]
fn test_missing_limbs_contribute_nothing() {
    let partial = BTreeMap::from([(Limb::LeftArm, 6), (Limb::LeftLeg, 4)]);
    let summary = aggregator().summarize(&partial);

    assert_eq!(summary.arm_movements, 6);
    assert_eq!(summary.leg_movements, 4);
    assert_eq!(summary.per_limb.len(), 2);
    assert_eq!(summary.balance, UsageBalance::Balanced);
}

#[test]
fn test_balance_serializes_in_snake_case() {
    let json = serde_json::to_value(UsageBalance::ArmDominant).unwrap();
    assert_eq!(json, "arm_dominant");
}
