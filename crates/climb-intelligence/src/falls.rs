// ABOUTME: Partial and full fall detection from acceleration magnitude spikes
// ABOUTME: A full fall is a cluster of spikes covering all four limbs within a sync window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fall detector.
//!
//! Every sample whose acceleration magnitude exceeds the threshold is a
//! partial-fall event for its limb. Merged events are scanned in time order:
//! starting from event `i`, events up to `sync_window_seconds` later are
//! gathered (inclusive). When the gathered limbs cover all four limbs a full
//! fall is recorded at event `i` and the scan resumes at the first event past
//! the window, so one synchronized cluster is never reported twice. Otherwise
//! the scan advances by one event.

use crate::config::FallConfig;
use crate::events::{merge_by_time, LimbEvent};
use chrono::{DateTime, Utc};
use climb_core::{elapsed_seconds, Limb, Series};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Fall events for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallReport {
    /// All threshold crossings on any limb, time-sorted
    pub partial_falls: Vec<LimbEvent>,
    /// Timestamps of synchronized all-limb clusters
    pub full_falls: Vec<DateTime<Utc>>,
}

impl FallReport {
    /// Number of partial-fall events
    #[must_use]
    pub fn partial_count(&self) -> usize {
        self.partial_falls.len()
    }

    /// Number of full falls
    #[must_use]
    pub fn full_count(&self) -> usize {
        self.full_falls.len()
    }
}

/// Magnitude-spike fall detector
#[derive(Debug, Clone, Copy)]
pub struct FallDetector {
    config: FallConfig,
}

impl FallDetector {
    /// Create a detector
    #[must_use]
    pub const fn new(config: FallConfig) -> Self {
        Self { config }
    }

    /// Every sample of one limb above the magnitude threshold
    #[must_use]
    pub fn detect_partial(&self, series: &Series) -> Vec<LimbEvent> {
        series
            .samples()
            .iter()
            .filter(|sample| sample.accel.magnitude() > self.config.magnitude_threshold)
            .map(|sample| LimbEvent::new(sample.timestamp, series.limb()))
            .collect()
    }

    /// Scan time-sorted events for all-limb clusters
    #[must_use]
    pub fn detect_full_falls(&self, events: &[LimbEvent]) -> Vec<DateTime<Utc>> {
        let mut falls = Vec::new();
        let mut i = 0;

        while i < events.len() {
            let anchor = events[i].timestamp;
            let window_end = events[i..]
                .iter()
                .position(|event| {
                    elapsed_seconds(anchor, event.timestamp) > self.config.sync_window_seconds
                })
                .map_or(events.len(), |offset| i + offset);

            let limbs: HashSet<Limb> = events[i..window_end].iter().map(|e| e.limb).collect();
            if limbs.len() == Limb::ALL.len() {
                falls.push(anchor);
                i = window_end;
            } else {
                i += 1;
            }
        }

        falls
    }

    /// Detect partial and full falls across all supplied limbs
    #[must_use]
    pub fn analyze<'a, I>(&self, series: I) -> FallReport
    where
        I: IntoIterator<Item = &'a Series>,
    {
        let partial_falls = merge_by_time(series.into_iter().map(|s| self.detect_partial(s)));
        let full_falls = self.detect_full_falls(&partial_falls);

        debug!(partial = partial_falls.len(), "partial falls detected");
        if !full_falls.is_empty() {
            info!(full = full_falls.len(), "full falls detected");
        }

        FallReport {
            partial_falls,
            full_falls,
        }
    }
}
