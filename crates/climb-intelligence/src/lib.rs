// ABOUTME: Motion analytics engine for multi-limb inertial sensor sessions
// ABOUTME: Stateless detectors for windows, stillness, holds, jerk, rhythm, falls, and usage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Climb Intelligence
//!
//! Pure analytics over already-loaded [`climb_core::Series`]. Nothing here
//! performs I/O; the orchestrator in the root crate loads files and decides
//! which limbs participate.
//!
//! Per-limb detectors (`sample_rate`, `windowing`, `stillness`, `holds`,
//! `smoothness`, `usage` counting) read only their own series. Cross-limb
//! detectors (`rhythm`, `falls`) take every loaded series and merge events
//! in time order.

/// Detector parameters and validation
pub mod config;

/// Per-limb event type and merging
pub mod events;

/// Partial and full fall detection
pub mod falls;

/// Hold, grip, and steadiness detection
pub mod holds;

/// Movement rhythm analysis
pub mod rhythm;

/// Sample-rate estimation
pub mod sample_rate;

/// Jerk-based smoothness scoring
pub mod smoothness;

/// Window stillness classification
pub mod stillness;

/// Arm versus leg usage
pub mod usage;

/// Fixed-duration windowing
pub mod windowing;

pub use config::{
    AnalysisConfig, AnalysisConfigError, FallConfig, GripConfig, RhythmConfig, SmoothnessConfig,
    StabilityConfig, SteadinessConfig, StillnessConfig, UsageConfig,
};
pub use events::{merge_by_time, LimbEvent};
pub use falls::{FallDetector, FallReport};
pub use holds::{GripCount, HoldDetector, HoldRun, StabilityAssessment};
pub use rhythm::{RhythmAnalyzer, RhythmStats};
pub use sample_rate::{estimate_rate, SampleRate};
pub use smoothness::{combine_limb_scores, MovementInterval, SmoothnessResult, SmoothnessScorer};
pub use stillness::{StillnessClassifier, StillnessLabels};
pub use usage::{UsageAggregator, UsageBalance, UsageSummary};
pub use windowing::{partition, window_len, Window};
