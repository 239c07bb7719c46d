// ABOUTME: Movement rhythm analysis from debounced movement onsets across all limbs
// ABOUTME: Computes inter-onset interval mean, population std, and coefficient of variation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rhythm analyzer.
//!
//! Each limb is scanned on its own: an onset fires when acceleration magnitude
//! exceeds the movement threshold and at least `min_pause_seconds` have passed
//! since that limb's previous onset. Onsets from all limbs are then merged in
//! time order without a second debounce, and the gaps between consecutive
//! onsets are summarized.

use crate::config::RhythmConfig;
use crate::events::{merge_by_time, LimbEvent};
use chrono::{DateTime, Utc};
use climb_core::stats::{mean, std_population};
use climb_core::{elapsed_seconds, Series};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inter-onset interval statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhythmStats {
    /// Mean gap between consecutive onsets (seconds)
    pub mean_interval: f64,
    /// Population standard deviation of the gaps (seconds)
    pub std_interval: f64,
    /// `std / mean`; lower means a more regular cadence, +inf when the mean gap is 0
    pub rhythm_score: f64,
    /// Number of onsets the statistics were computed from
    pub onset_count: usize,
}

/// Movement-onset detector and interval analyzer
#[derive(Debug, Clone, Copy)]
pub struct RhythmAnalyzer {
    config: RhythmConfig,
}

impl RhythmAnalyzer {
    /// Create an analyzer
    #[must_use]
    pub const fn new(config: RhythmConfig) -> Self {
        Self { config }
    }

    /// Debounced movement onsets of one limb
    #[must_use]
    pub fn detect_onsets(&self, series: &Series) -> Vec<LimbEvent> {
        let mut onsets = Vec::new();
        let mut last_onset: Option<DateTime<Utc>> = None;

        for sample in series.samples() {
            if sample.accel.magnitude() <= self.config.movement_threshold {
                continue;
            }
            let rested = last_onset.is_none_or(|last| {
                elapsed_seconds(last, sample.timestamp) >= self.config.min_pause_seconds
            });
            if rested {
                onsets.push(LimbEvent::new(sample.timestamp, series.limb()));
                last_onset = Some(sample.timestamp);
            }
        }

        debug!(limb = %series.limb(), onsets = onsets.len(), "movement onsets detected");
        onsets
    }

    /// Summarize consecutive gaps; `None` with fewer than two onsets
    #[must_use]
    pub fn analyze_intervals(onset_seconds: &[f64]) -> Option<RhythmStats> {
        if onset_seconds.len() < 2 {
            return None;
        }

        let intervals: Vec<f64> = onset_seconds.windows(2).map(|w| w[1] - w[0]).collect();
        let mean_interval = mean(&intervals)?;
        let std_interval = std_population(&intervals)?;
        let rhythm_score = if mean_interval == 0.0 {
            f64::INFINITY
        } else {
            std_interval / mean_interval
        };

        Some(RhythmStats {
            mean_interval,
            std_interval,
            rhythm_score,
            onset_count: onset_seconds.len(),
        })
    }

    /// Summarize time-sorted onset events
    #[must_use]
    pub fn analyze_events(onsets: &[LimbEvent]) -> Option<RhythmStats> {
        let first = onsets.first()?.timestamp;
        let seconds: Vec<f64> = onsets
            .iter()
            .map(|event| elapsed_seconds(first, event.timestamp))
            .collect();
        Self::analyze_intervals(&seconds)
    }

    /// Detect onsets per limb, merge them, and summarize the merged cadence
    #[must_use]
    pub fn analyze<'a, I>(&self, series: I) -> (Vec<LimbEvent>, Option<RhythmStats>)
    where
        I: IntoIterator<Item = &'a Series>,
    {
        let merged = merge_by_time(series.into_iter().map(|s| self.detect_onsets(s)));
        let stats = Self::analyze_events(&merged);
        (merged, stats)
    }
}
