// ABOUTME: Timestamped per-limb events produced by threshold crossings
// ABOUTME: Shared by movement-onset (rhythm) and partial-fall detection, plus cross-limb merging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use climb_core::Limb;
use serde::{Deserialize, Serialize};

/// A threshold crossing on one limb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimbEvent {
    /// When the crossing happened
    pub timestamp: DateTime<Utc>,
    /// Limb that produced it
    pub limb: Limb,
}

impl LimbEvent {
    /// Create an event
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, limb: Limb) -> Self {
        Self { timestamp, limb }
    }
}

/// Merge per-limb event streams into one time-sorted stream
///
/// Ties are ordered by limb so the merge is deterministic regardless of the
/// order in which limb streams are supplied.
#[must_use]
pub fn merge_by_time<I>(streams: I) -> Vec<LimbEvent>
where
    I: IntoIterator<Item = Vec<LimbEvent>>,
{
    let mut merged: Vec<LimbEvent> = streams.into_iter().flatten().collect();
    merged.sort_by_key(|event| (event.timestamp, event.limb));
    merged
}
