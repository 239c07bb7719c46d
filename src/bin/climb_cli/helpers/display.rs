// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for the climb-motion CLI
// ABOUTME: Provides consistent stdout display for reports and series inspection

use climb_intelligence::SampleRate;
use climb_motion::loader::LoadedSeries;
use std::path::Path;

/// Print a rendered report to stdout
pub fn print_report(rendered: &str) {
    println!("{rendered}");
}

/// Display loader statistics for one series
pub fn display_inspection(file: &Path, loaded: &LoadedSeries, rate: SampleRate) {
    let stats = &loaded.stats;
    let series = &loaded.series;

    println!("\nSeries {}", file.display());
    println!("{}", "=".repeat(60));
    println!("   Limb: {}", series.limb().display_name());
    println!("   Rows read: {}", stats.rows_read);
    println!("   Rows kept: {}", stats.rows_kept());
    println!("   Malformed rows skipped: {}", stats.rows_malformed);
    println!("   Out-of-order rows skipped: {}", stats.rows_out_of_order);
    println!(
        "   Magnetometer: {}",
        if stats.has_magnetometer { "present" } else { "absent" }
    );

    match (series.samples().first(), series.samples().last()) {
        (Some(first), Some(last)) => {
            println!("   First sample: {}", first.timestamp.to_rfc3339());
            println!("   Last sample: {}", last.timestamp.to_rfc3339());
            println!("   Duration: {:.3} s", series.duration_seconds());
        }
        _ => println!("   No usable samples"),
    }
    println!("   Estimated rate: {:.2} Hz", rate.hz());
}
