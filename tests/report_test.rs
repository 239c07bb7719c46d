// ABOUTME: Tests for rendering session metrics as JSON and as a text report
// ABOUTME: Validates undefined metrics render cleanly and excluded limbs are called out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use climb_core::{Limb, Vec3};
use climb_intelligence::AnalysisConfig;
use climb_motion::report::{render, ReportFormat};
use climb_motion::session::{SessionAnalyzer, SessionMetrics};
use climb_motion::synthetic::SyntheticSession;
use common::{accel_z, base_time, constant_series};
use serde_json::Value;

fn partial_session() -> SessionMetrics {
    let series = vec![
        constant_series(Limb::LeftArm, 100, 50.0, accel_z(2.2), Vec3::default()),
        constant_series(Limb::LeftLeg, 100, 50.0, accel_z(2.2), Vec3::default()),
    ];
    SessionAnalyzer::new(AnalysisConfig::default())
        .unwrap()
        .analyze_series(series)
}

#[test]
fn test_json_report_parses_back() {
    let rendered = render(&partial_session(), ReportFormat::Json).unwrap();
    let json: Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(json["rhythm"], Value::Null);
    assert_eq!(json["grip_counts"]["right_arm"], Value::Null);
    assert_eq!(json["limbs"].as_array().unwrap().len(), 4);
    assert_eq!(json["caveats"].as_array().unwrap().len(), 4);
}

#[test]
fn test_text_report_lists_exclusions_and_caveats() {
    let rendered = render(&partial_session(), ReportFormat::Pretty).unwrap();

    assert!(rendered.starts_with("Climbing session report"));
    assert!(rendered.contains("Rhythm:             insufficient data"));
    assert!(rendered.contains("Right Arm  excluded: series file not found"));
    assert!(rendered.contains("Caveats"));
    assert!(rendered.contains("No significant movement detected"));
}

#[test]
fn test_text_report_lists_full_falls() {
    let series = SyntheticSession::new(base_time(), 9)
        .with_duration(6.0)
        .with_fall_at(2.0)
        .generate();
    let metrics = SessionAnalyzer::new(AnalysisConfig::default())
        .unwrap()
        .analyze_series(series);
    let rendered = render(&metrics, ReportFormat::Pretty).unwrap();

    assert!(rendered.contains("4 partial, 1 full"));
    assert!(rendered.contains("full fall at 2025-03-01T10:00:02"));
}
