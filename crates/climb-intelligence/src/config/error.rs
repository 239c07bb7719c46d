// ABOUTME: Configuration error types for analysis parameter validation
// ABOUTME: Defines error variants for invalid thresholds, windows, and override files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for analysis parameter validation.

use climb_core::AppError;
use thiserror::Error;

/// Analysis configuration errors
#[derive(Debug, Error)]
pub enum AnalysisConfigError {
    /// A threshold override could not be parsed or is out of range
    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    /// A window duration or window count override is invalid
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// The override file could not be read or parsed
    #[error("Invalid override file: {0}")]
    InvalidFile(String),

    /// Cross-field validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

impl From<AnalysisConfigError> for AppError {
    fn from(error: AnalysisConfigError) -> Self {
        Self::config_invalid(error.to_string()).with_source(error)
    }
}
