// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command modules for the climb-motion CLI and their shared configuration loading
// ABOUTME: Provides access to analyze, inspect, and config commands

pub mod analyze;
pub mod config;
pub mod inspect;

use climb_motion::config::AnalysisConfig;
use climb_motion::errors::AppResult;
use std::path::Path;
use tracing::info;

/// Defaults, then the optional override file, then `CLIMB_*` environment variables
pub fn load_config(path: Option<&Path>) -> AppResult<AnalysisConfig> {
    let mut config = match path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration override file");
            AnalysisConfig::from_json_file(path)?
        }
        None => AnalysisConfig::default(),
    };
    config.apply_environment()?;
    config.validate()?;
    Ok(config)
}
