// ABOUTME: Session analysis command for the climb-motion CLI
// ABOUTME: Loads the configuration, analyzes a session directory, and writes the rendered report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use climb_motion::errors::{AppError, AppResult};
use climb_motion::report::{render, ReportFormat};
use climb_motion::session::SessionAnalyzer;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::load_config;
use crate::helpers::display::print_report;

/// Analyze one session directory
pub fn run(
    session_dir: &Path,
    config_path: Option<&Path>,
    format: ReportFormat,
    output: Option<&Path>,
) -> AppResult<()> {
    if !session_dir.is_dir() {
        return Err(AppError::missing_input(format!(
            "session directory {} does not exist",
            session_dir.display()
        )));
    }

    let analyzer = SessionAnalyzer::new(load_config(config_path)?)?;
    let metrics = analyzer.analyze_directory(session_dir);
    if metrics.analyzed_limbs().is_empty() {
        warn!(session = %session_dir.display(), "no limb series could be analyzed");
    }

    let rendered = render(&metrics, format)?;
    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!(path = %path.display(), "report written");
        }
        None => print_report(&rendered),
    }
    Ok(())
}
