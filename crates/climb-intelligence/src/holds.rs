// ABOUTME: Hold and grip run detection over stillness labels, with per-window stability verdicts
// ABOUTME: Coalesces consecutive still windows into holds, counts grips, and scores hold stability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Hold/grip run detection.
//!
//! A hold is a maximal run of at least `min_consecutive_windows` still windows.
//! Grip counting treats each hold as one grip no matter how many windows it
//! spans. Stability scoring re-tests every window inside a hold against strict
//! per-axis standard deviation thresholds.

use crate::config::{GripConfig, StabilityConfig, SteadinessConfig};
use crate::sample_rate::SampleRate;
use crate::stillness::StillnessClassifier;
use crate::windowing::partition;
use climb_core::Series;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A maximal run of consecutive still windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldRun {
    /// Index of the first still window
    pub start_window: usize,
    /// Number of windows in the run
    pub window_count: usize,
}

impl HoldRun {
    /// Window indices covered by this run
    pub fn window_indices(&self) -> impl Iterator<Item = usize> {
        self.start_window..self.start_window + self.window_count
    }
}

/// Hold stability for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StabilityAssessment {
    /// Stable hold windows / hold windows analyzed, 0 when there is no hold
    pub score: f64,
    /// Hold windows re-tested
    pub hold_windows: usize,
    /// Hold windows that passed the per-axis test
    pub stable_windows: usize,
    /// Detected holds
    pub holds: Vec<HoldRun>,
    /// Verdict per analyzed hold window, in window order
    pub verdicts: Vec<bool>,
}

/// Grip count for one series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GripCount {
    /// Distinct hold episodes
    pub count: usize,
    /// The holds that were counted
    pub holds: Vec<HoldRun>,
}

/// Hold and grip detection engine
pub struct HoldDetector;

impl HoldDetector {
    /// Find maximal runs of at least `min_consecutive` still windows
    ///
    /// Scanning left to right, a qualifying run is coalesced into one hold and
    /// the scan resumes after its last still window.
    #[must_use]
    pub fn detect_runs(labels: &[bool], min_consecutive: usize) -> Vec<HoldRun> {
        let min_consecutive = min_consecutive.max(1);
        let mut runs = Vec::new();
        let mut i = 0;

        while i + min_consecutive <= labels.len() {
            if labels[i..i + min_consecutive].iter().all(|&still| still) {
                let start = i;
                while i < labels.len() && labels[i] {
                    i += 1;
                }
                runs.push(HoldRun {
                    start_window: start,
                    window_count: i - start,
                });
            } else {
                i += 1;
            }
        }

        runs
    }

    /// Count grips in a series
    #[must_use]
    pub fn count_grips(series: &Series, rate: SampleRate, config: &GripConfig) -> GripCount {
        let classifier = StillnessClassifier::new(config.stillness);
        let (_, labels) = classifier.label_series(series, rate);
        let holds = Self::detect_runs(&labels, config.min_consecutive_windows);

        debug!(
            limb = %series.limb(),
            windows = labels.len(),
            grips = holds.len(),
            "grip detection complete"
        );

        GripCount {
            count: holds.len(),
            holds,
        }
    }

    /// Score hold stability of a series
    #[must_use]
    pub fn assess_stability(
        series: &Series,
        rate: SampleRate,
        config: &StabilityConfig,
    ) -> StabilityAssessment {
        let classifier = StillnessClassifier::new(config.stillness);
        let (windows, labels) = classifier.label_series(series, rate);
        let holds = Self::detect_runs(&labels, config.min_consecutive_windows);

        let verdicts: Vec<bool> = holds
            .iter()
            .flat_map(HoldRun::window_indices)
            .map(|index| {
                windows[index]
                    .per_axis_std_below(config.accel_std_threshold, config.gyro_std_threshold)
            })
            .collect();

        let hold_windows = verdicts.len();
        let stable_windows = verdicts.iter().filter(|&&stable| stable).count();
        let score = ratio(stable_windows, hold_windows);

        debug!(
            limb = %series.limb(),
            holds = holds.len(),
            hold_windows,
            stable_windows,
            "hold stability assessed"
        );

        StabilityAssessment {
            score,
            hold_windows,
            stable_windows,
            holds,
            verdicts,
        }
    }

    /// Fraction of all windows passing the strict per-axis test, 0 without windows
    #[must_use]
    pub fn window_steadiness(series: &Series, rate: SampleRate, config: &SteadinessConfig) -> f64 {
        let windows = partition(series.samples(), config.window_seconds, rate);
        let steady = windows
            .iter()
            .filter(|w| {
                w.per_axis_std_below(config.accel_std_threshold, config.gyro_std_threshold)
            })
            .count();
        ratio(steady, windows.len())
    }
}

#[allow(clippy::cast_precision_loss)] // Safe: window counts are small
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
