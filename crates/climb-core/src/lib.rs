// ABOUTME: Core types and constants for climbing motion analytics
// ABOUTME: Foundation crate with error handling, sensor models, statistics, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Climb Core
//!
//! Foundation crate shared by the analytics engine and the session orchestrator.
//! It changes rarely, which keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: `Limb`, `Vec3`, `Sample`, `Series`, and per-limb outcomes
//! - **stats**: mean, standard deviation, median, and rounding helpers
//! - **constants**: sensor conventions, file format headers, display precision

/// Unified error handling system with standard error codes
pub mod errors;

/// Sensor data models
pub mod models;

/// Numeric helpers
pub mod stats;

/// Application constants organized by domain
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    elapsed_micros, elapsed_seconds, ExclusionReason, Limb, LimbOutcome, Sample,
    Series, Vec3,
};
