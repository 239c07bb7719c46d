// ABOUTME: Renders a session metrics bundle as JSON or as a human readable text report
// ABOUTME: Keeps presentation out of the analytics so the bundle stays a plain data record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::session::{LimbMetrics, SessionMetrics};
use climb_core::{AppResult, LimbOutcome};
use std::fmt::Write;

/// Output format for a rendered report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Pretty-printed `JSON`
    #[default]
    Json,
    /// Text summary for terminals
    Pretty,
}

/// Render a bundle in the requested format
///
/// # Errors
///
/// Returns `SerializationError` when `JSON` encoding fails
pub fn render(metrics: &SessionMetrics, format: ReportFormat) -> AppResult<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(metrics)?),
        ReportFormat::Pretty => Ok(render_text(metrics)),
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

/// Human readable summary
#[must_use]
pub fn render_text(metrics: &SessionMetrics) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(out, "Climbing session report");
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(out, "Hold stability:     {}", or_dash(metrics.stability));
    let _ = writeln!(
        out,
        "Grips:              left arm {} / right arm {}",
        or_dash(metrics.grip_counts.left_arm),
        or_dash(metrics.grip_counts.right_arm)
    );
    let _ = writeln!(out, "Smoothness:         {}", or_dash(metrics.smoothness));

    match &metrics.rhythm {
        Some(rhythm) => {
            let score = if rhythm.rhythm_score.is_finite() {
                rhythm.rhythm_score.to_string()
            } else {
                "inf".to_owned()
            };
            let _ = writeln!(
                out,
                "Rhythm:             mean {}s, std {}s, score {score} ({} onsets)",
                rhythm.mean_interval, rhythm.std_interval, rhythm.onset_count
            );
        }
        None => {
            let _ = writeln!(out, "Rhythm:             insufficient data");
        }
    }

    let usage = &metrics.usage;
    let _ = writeln!(
        out,
        "Usage:              arms {} ({}) / legs {} ({})",
        usage.arm_movements, usage.arm_usage_ratio, usage.leg_movements, usage.leg_usage_ratio
    );
    let _ = writeln!(out, "                    {}", usage.comment);
    let _ = writeln!(
        out,
        "Falls:              {} partial, {} full",
        metrics.falls.partial_count(),
        metrics.falls.full_count()
    );
    for at in &metrics.falls.full_falls {
        let _ = writeln!(out, "  full fall at {}", at.to_rfc3339());
    }

    let _ = writeln!(out, "\nPer limb");
    let _ = writeln!(out, "{}", "-".repeat(60));
    for report in &metrics.limbs {
        match &report.outcome {
            LimbOutcome::Analyzed { value } => {
                write_limb(&mut out, report.limb.display_name(), value);
            }
            LimbOutcome::Excluded { reason } => {
                let _ = writeln!(out, "{:<10} excluded: {reason}", report.limb.display_name());
            }
        }
    }

    if !metrics.caveats.is_empty() {
        let _ = writeln!(out, "\nCaveats");
        let _ = writeln!(out, "{}", "-".repeat(60));
        for caveat in &metrics.caveats {
            let _ = writeln!(out, "* {caveat}");
        }
    }
    out
}

fn write_limb(out: &mut String, name: &str, m: &LimbMetrics) {
    let _ = writeln!(
        out,
        "{name:<10} {} samples @ {} Hz, stability {} ({}/{} windows), steadiness {}, grips {}, \
         smoothness {}, movements {}, onsets {}, spikes {}",
        m.sample_count,
        m.sample_rate_hz,
        m.stability,
        m.stable_windows,
        m.hold_windows,
        m.window_steadiness,
        m.grip_count,
        m.smoothness,
        m.usage_movements,
        m.movement_onsets,
        m.partial_falls
    );
}
