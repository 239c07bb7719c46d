// ABOUTME: Movement smoothness scoring from the time derivative (jerk) of motion magnitude
// ABOUTME: Detects movement intervals by rolling deviation, reduces jerk robustly, normalizes to 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Smoothness/jerk scorer.
//!
//! 1. Rolling sample standard deviation of acceleration and angular velocity
//!    magnitude flags each sample as moving when either reaches its threshold.
//! 2. Rising and falling edges of that flag delimit movement intervals; an
//!    interval spans from its rising edge through the sample where the flag
//!    falls (or the last sample when still moving at the end).
//! 3. Per interval, the mean absolute jerk of each magnitude is averaged into
//!    one value. Across intervals the values are clipped and reduced by median.
//! 4. `score = clamp(1 - median_jerk / max_expected_jerk, 0, 1) * 100`, or 100
//!    when there is no movement or no usable jerk sample.

use crate::config::SmoothnessConfig;
use chrono::{DateTime, Utc};
use climb_core::stats::{mean, median, std_sample};
use climb_core::{elapsed_seconds, Series};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score assigned when no jerk evidence exists
pub const PERFECTLY_SMOOTH: f64 = 100.0;

/// Inclusive sample index span of one movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementInterval {
    /// First moving sample
    pub start: usize,
    /// Last sample of the span (inclusive)
    pub end: usize,
}

impl MovementInterval {
    /// Number of samples in the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Spans always hold at least one sample
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Smoothness of one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothnessResult {
    /// Score in [0, 100]
    pub score: f64,
    /// Median clipped jerk across intervals, if any interval produced one
    pub average_jerk: Option<f64>,
    /// Detected movement intervals
    pub intervals: Vec<MovementInterval>,
    /// Jerk per interval that had at least one valid time delta
    pub interval_jerks: Vec<f64>,
}

/// Jerk-based smoothness scorer
#[derive(Debug, Clone, Copy)]
pub struct SmoothnessScorer {
    config: SmoothnessConfig,
}

impl SmoothnessScorer {
    /// Create a scorer
    #[must_use]
    pub const fn new(config: SmoothnessConfig) -> Self {
        Self { config }
    }

    /// Rolling sample standard deviation over a trailing window of up to `window` values
    #[must_use]
    pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
        let window = window.max(1);
        (0..values.len())
            .map(|i| {
                let start = (i + 1).saturating_sub(window);
                std_sample(&values[start..=i]).unwrap_or(0.0)
            })
            .collect()
    }

    /// Moving flag per sample
    #[must_use]
    pub fn moving_flags(&self, accel_mag: &[f64], gyro_mag: &[f64]) -> Vec<bool> {
        let accel_std = Self::rolling_std(accel_mag, self.config.rolling_window_samples);
        let gyro_std = Self::rolling_std(gyro_mag, self.config.rolling_window_samples);

        accel_std
            .iter()
            .zip(&gyro_std)
            .map(|(&a, &g)| {
                a >= self.config.accel_std_threshold || g >= self.config.gyro_std_threshold
            })
            .collect()
    }

    /// Edge-triggered movement intervals
    #[must_use]
    pub fn detect_intervals(flags: &[bool]) -> Vec<MovementInterval> {
        let Some(&last) = flags.last() else {
            return Vec::new();
        };

        let mut starts = Vec::new();
        let mut ends = Vec::new();
        if flags[0] {
            starts.push(0);
        }
        for (i, pair) in flags.windows(2).enumerate() {
            match (pair[0], pair[1]) {
                (false, true) => starts.push(i + 1),
                (true, false) => ends.push(i + 1),
                _ => {}
            }
        }
        if last {
            ends.push(flags.len() - 1);
        }

        starts
            .into_iter()
            .zip(ends)
            .map(|(start, end)| MovementInterval { start, end })
            .collect()
    }

    /// Mean of accel and gyro mean absolute jerk over one interval
    ///
    /// Each time delta is taken between neighbouring timestamps on integer
    /// microseconds, so a delta exactly at the noise floor is always skipped.
    /// `None` when the interval has fewer than two samples or no usable delta.
    #[must_use]
    pub fn interval_jerk(
        &self,
        timestamps: &[DateTime<Utc>],
        accel_mag: &[f64],
        gyro_mag: &[f64],
        interval: MovementInterval,
    ) -> Option<f64> {
        if interval.len() < 2 {
            return None;
        }

        let mut accel_jerk = Vec::new();
        let mut gyro_jerk = Vec::new();
        for k in interval.start + 1..=interval.end {
            let dt = elapsed_seconds(timestamps[k - 1], timestamps[k]);
            if dt <= self.config.min_time_delta_seconds {
                continue;
            }
            accel_jerk.push((accel_mag[k] - accel_mag[k - 1]).abs() / dt);
            gyro_jerk.push((gyro_mag[k] - gyro_mag[k - 1]).abs() / dt);
        }

        Some((mean(&accel_jerk)? + mean(&gyro_jerk)?) / 2.0)
    }

    /// Map an average jerk onto the 0-100 scale
    #[must_use]
    pub fn score_from_jerk(&self, average_jerk: f64) -> f64 {
        (1.0 - average_jerk / self.config.max_expected_jerk).clamp(0.0, 1.0) * 100.0
    }

    /// Score a series
    #[must_use]
    pub fn score(&self, series: &Series) -> SmoothnessResult {
        let timestamps = series.timestamps();
        let accel_mag = series.accel_magnitudes();
        let gyro_mag = series.gyro_magnitudes();

        let flags = self.moving_flags(&accel_mag, &gyro_mag);
        let intervals = Self::detect_intervals(&flags);

        let interval_jerks: Vec<f64> = intervals
            .iter()
            .filter_map(|&interval| {
                self.interval_jerk(&timestamps, &accel_mag, &gyro_mag, interval)
            })
            .filter(|jerk| jerk.is_finite())
            .collect();

        let clipped: Vec<f64> = interval_jerks
            .iter()
            .map(|jerk| jerk.clamp(0.0, self.config.jerk_clip_max))
            .collect();
        let average_jerk = median(&clipped);
        let score = average_jerk.map_or(PERFECTLY_SMOOTH, |jerk| self.score_from_jerk(jerk));

        debug!(
            limb = %series.limb(),
            intervals = intervals.len(),
            scored_intervals = interval_jerks.len(),
            score,
            "smoothness scored"
        );

        SmoothnessResult {
            score,
            average_jerk,
            intervals,
            interval_jerks,
        }
    }
}

/// Arithmetic mean of per-limb scores; excluded limbs are simply not supplied
#[must_use]
pub fn combine_limb_scores<I: IntoIterator<Item = f64>>(scores: I) -> Option<f64> {
    let scores: Vec<f64> = scores.into_iter().collect();
    mean(&scores)
}
