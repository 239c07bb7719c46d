// ABOUTME: Main library entry point for climbing session motion analytics
// ABOUTME: Loads four limb recordings, runs the analytics engine, and renders the metrics bundle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Climb Motion
//!
//! Session analytics for four body-worn inertial sensors (both forearms, both
//! shins) recorded during a climb. A session is a directory holding
//! `left_arm.csv`, `right_arm.csv`, `left_leg.csv` and `right_leg.csv`.
//!
//! ## Architecture
//!
//! - **climb-core**: errors, sensor models, numeric helpers
//! - **climb-intelligence**: pure detectors (stillness, holds, jerk, rhythm, falls, usage)
//! - **loader**: CSV series reading and writing
//! - **session**: per-limb parallel stage, cross-limb join, `SessionMetrics`
//! - **report**: `JSON` and text rendering
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use climb_motion::config::AnalysisConfig;
//! use climb_motion::errors::AppResult;
//! use climb_motion::session::SessionAnalyzer;
//! use std::path::Path;
//!
//! fn main() -> AppResult<()> {
//!     let analyzer = SessionAnalyzer::new(AnalysisConfig::from_environment()?)?;
//!     let metrics = analyzer.analyze_directory(Path::new("./session"));
//!     println!("smoothness: {:?}", metrics.smoothness);
//!     Ok(())
//! }
//! ```

/// CSV series loading and writing
pub mod loader;

/// Structured logging setup
pub mod logging;

/// Report rendering
pub mod report;

/// Session orchestration and the metrics bundle
pub mod session;

/// Synthetic session generation for demos, tests, and benchmarks
pub mod synthetic;

/// Re-export of the error types from climb-core
pub mod errors {
    pub use climb_core::errors::*;
}

/// Re-export of the sensor models from climb-core
pub mod models {
    pub use climb_core::models::*;
}

/// Re-export of the analysis configuration from climb-intelligence
pub mod config {
    pub use climb_intelligence::config::*;
}
