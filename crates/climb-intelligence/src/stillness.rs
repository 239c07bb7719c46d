// ABOUTME: Dual-threshold stillness classifier for fixed-duration windows
// ABOUTME: One parametrized classifier shared by hold stability and grip counting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Stillness classification.
//!
//! A window is still when both the mean absolute deviation of acceleration
//! magnitude from 1 g and the mean absolute deviation of angular velocity
//! magnitude from the same baseline stay strictly below their tolerances.

use crate::config::StillnessConfig;
use crate::sample_rate::SampleRate;
use crate::windowing::{partition, Window};
use climb_core::constants::sensor::NOMINAL_RESTING_MAGNITUDE;
use climb_core::stats::mean_abs_deviation_from;
use climb_core::Series;

/// Still/moving label per window
pub type StillnessLabels = Vec<bool>;

/// Stillness classifier bound to one parameter set
#[derive(Debug, Clone, Copy)]
pub struct StillnessClassifier {
    config: StillnessConfig,
}

impl StillnessClassifier {
    /// Create a classifier for the given parameters
    #[must_use]
    pub const fn new(config: StillnessConfig) -> Self {
        Self { config }
    }

    /// Parameters in use
    #[must_use]
    pub const fn config(&self) -> &StillnessConfig {
        &self.config
    }

    /// Decide whether one window is still
    #[must_use]
    pub fn is_still(&self, window: &Window<'_>) -> bool {
        let accel_dev =
            mean_abs_deviation_from(&window.accel_magnitudes(), NOMINAL_RESTING_MAGNITUDE);
        let gyro_dev =
            mean_abs_deviation_from(&window.gyro_magnitudes(), NOMINAL_RESTING_MAGNITUDE);

        match (accel_dev, gyro_dev) {
            (Some(accel), Some(gyro)) => {
                accel < self.config.accel_tolerance && gyro < self.config.gyro_tolerance
            }
            _ => false,
        }
    }

    /// Label each window of an already-partitioned series
    #[must_use]
    pub fn label(&self, windows: &[Window<'_>]) -> StillnessLabels {
        windows.iter().map(|w| self.is_still(w)).collect()
    }

    /// Partition a series with this classifier's window duration and label it
    #[must_use]
    pub fn label_series<'a>(
        &self,
        series: &'a Series,
        rate: SampleRate,
    ) -> (Vec<Window<'a>>, StillnessLabels) {
        let windows = partition(series.samples(), self.config.window_seconds, rate);
        let labels = self.label(&windows);
        (windows, labels)
    }
}
