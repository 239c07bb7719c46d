// ABOUTME: Series inspection command for the climb-motion CLI
// ABOUTME: Reports loader row accounting, recording span, and the estimated sample rate of one file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use climb_intelligence::SampleRate;
use climb_motion::errors::{AppError, AppResult};
use climb_motion::loader::SeriesLoader;
use climb_motion::models::Limb;
use std::path::Path;

use crate::helpers::display::display_inspection;

/// Inspect one series file
pub fn run(file: &Path, limb: Option<Limb>) -> AppResult<()> {
    let limb = match limb {
        Some(limb) => limb,
        None => limb_from_file_name(file)?,
    };

    let loaded = SeriesLoader::load_file(file, limb)?;
    let rate = SampleRate::of_series(&loaded.series);
    display_inspection(file, &loaded, rate);
    Ok(())
}

fn limb_from_file_name(file: &Path) -> AppResult<Limb> {
    file.file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| AppError::malformed_input(format!("{} has no file name", file.display())))?
        .parse()
        .map_err(|_| {
            AppError::malformed_input(format!(
                "cannot infer the limb from {}; pass --limb",
                file.display()
            ))
        })
}
