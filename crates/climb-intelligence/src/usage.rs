// ABOUTME: Arm versus leg usage balance from per-limb movement counts
// ABOUTME: Counts large consecutive magnitude deltas and classifies the leg share into bands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::UsageConfig;
use climb_core::constants::precision::RATIO_DECIMALS;
use climb_core::stats::round_to;
use climb_core::{Limb, Series};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Categorical usage band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageBalance {
    /// No limb produced a movement
    NoMovement,
    /// Leg share below the lower band edge
    ArmDominant,
    /// Leg share inside the inclusive band
    Balanced,
    /// Leg share above the upper band edge
    LegDominant,
}

impl UsageBalance {
    /// Coaching comment shown with the ratios
    #[must_use]
    pub const fn comment(self) -> &'static str {
        match self {
            Self::NoMovement => "No significant movement detected",
            Self::ArmDominant => "Climber overuses arms and underuses legs",
            Self::Balanced => "Balanced use of arms and legs",
            Self::LegDominant => "Climber uses legs more actively than arms, good technique",
        }
    }
}

impl fmt::Display for UsageBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.comment())
    }
}

/// Session-level usage figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSummary {
    /// Movements on both arms
    pub arm_movements: usize,
    /// Movements on both legs
    pub leg_movements: usize,
    /// Arm share of all movements, 0 without movement
    pub arm_usage_ratio: f64,
    /// Leg share of all movements, 0 without movement
    pub leg_usage_ratio: f64,
    /// Band the leg share falls into
    pub balance: UsageBalance,
    /// Human readable comment for the band
    pub comment: String,
    /// Movement count per limb that contributed
    pub per_limb: BTreeMap<Limb, usize>,
}

/// Movement counter and usage classifier
#[derive(Debug, Clone, Copy)]
pub struct UsageAggregator {
    config: UsageConfig,
}

impl UsageAggregator {
    /// Create an aggregator
    #[must_use]
    pub const fn new(config: UsageConfig) -> Self {
        Self { config }
    }

    /// Consecutive acceleration magnitude deltas above the movement threshold
    #[must_use]
    pub fn count_movements(&self, series: &Series) -> usize {
        series
            .accel_magnitudes()
            .windows(2)
            .filter(|pair| (pair[1] - pair[0]).abs() > self.config.movement_threshold)
            .count()
    }

    /// Band for an unrounded leg share
    #[must_use]
    pub fn classify(&self, leg_ratio: f64) -> UsageBalance {
        if leg_ratio < self.config.arm_dominant_below {
            UsageBalance::ArmDominant
        } else if leg_ratio > self.config.leg_dominant_above {
            UsageBalance::LegDominant
        } else {
            UsageBalance::Balanced
        }
    }

    /// Combine per-limb counts; limbs not supplied contribute nothing
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: movement counts are far below 2^52
    pub fn summarize(&self, counts: &BTreeMap<Limb, usize>) -> UsageSummary {
        let (arm_movements, leg_movements) =
            counts
                .iter()
                .fold((0_usize, 0_usize), |(arms, legs), (limb, &count)| {
                    if limb.is_arm() {
                        (arms + count, legs)
                    } else {
                        (arms, legs + count)
                    }
                });
        let total = arm_movements + leg_movements;

        let (arm_ratio, leg_ratio, balance) = if total == 0 {
            (0.0, 0.0, UsageBalance::NoMovement)
        } else {
            let arm_ratio = arm_movements as f64 / total as f64;
            let leg_ratio = leg_movements as f64 / total as f64;
            (arm_ratio, leg_ratio, self.classify(leg_ratio))
        };

        UsageSummary {
            arm_movements,
            leg_movements,
            arm_usage_ratio: round_to(arm_ratio, RATIO_DECIMALS),
            leg_usage_ratio: round_to(leg_ratio, RATIO_DECIMALS),
            balance,
            comment: balance.comment().to_owned(),
            per_limb: counts.clone(),
        }
    }
}
