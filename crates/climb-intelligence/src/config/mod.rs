// ABOUTME: Configuration module for climb-intelligence crate
// ABOUTME: Re-exports analysis configuration and per-detector parameter types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Top-level analysis configuration with environment and file overrides
pub mod analysis;

/// Per-detector parameter records
pub mod detectors;

/// Configuration error types
pub mod error;

pub use analysis::AnalysisConfig;
pub use detectors::{
    FallConfig, GripConfig, RhythmConfig, SmoothnessConfig, StabilityConfig, SteadinessConfig,
    StillnessConfig, UsageConfig,
};
pub use error::AnalysisConfigError;
