// ABOUTME: Configuration display command for the climb-motion CLI
// ABOUTME: Prints the effective analysis parameters after file and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use climb_motion::errors::AppResult;
use std::path::Path;

use super::load_config;
use crate::helpers::display::print_report;

/// Print the effective configuration
pub fn run(config_path: Option<&Path>) -> AppResult<()> {
    let config = load_config(config_path)?;
    print_report(&serde_json::to_string_pretty(&config)?);
    Ok(())
}
