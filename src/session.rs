// ABOUTME: Session orchestrator composing per-limb detectors and cross-limb joins into one bundle
// ABOUTME: Loads four limb series, analyzes them in parallel, then merges onsets, falls, and usage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session analysis
//!
//! The per-limb stage runs on the rayon pool and reads only its own series:
//! sample rate is estimated once per series and handed to every window-based
//! detector. Movement onsets and partial falls are detected per limb in the
//! same stage; the join stage merges them across limbs for rhythm and
//! full-fall detection, and combines per-limb scores into session scores.
//!
//! A limb that fails to load is never fatal. It becomes
//! [`LimbOutcome::Excluded`] and is left out of every aggregate's denominator.

use crate::loader::{LoadStats, LoadedSeries, SeriesLoader};
use climb_core::constants::precision::{
    INTERVAL_DECIMALS, PERCENT_DECIMALS, RATE_DECIMALS, RATIO_DECIMALS,
};
use climb_core::stats::{mean, round_to};
use climb_core::{AppError, AppResult, ErrorCode, ExclusionReason, Limb, LimbOutcome, Series};
use climb_intelligence::{
    combine_limb_scores, merge_by_time, AnalysisConfig, FallDetector, FallReport, HoldDetector,
    LimbEvent, RhythmAnalyzer, RhythmStats, SampleRate, SmoothnessScorer, UsageAggregator,
    UsageSummary,
};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// Per-limb figures reported next to the session aggregates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimbMetrics {
    /// Samples that survived loading
    pub sample_count: usize,
    /// Rows dropped by the loader
    pub rows_dropped: usize,
    /// Recording span (seconds)
    pub duration_seconds: f64,
    /// Estimated sample rate (Hz)
    pub sample_rate_hz: f64,
    /// Stable hold windows / hold windows, in [0, 1]
    pub stability: f64,
    /// Holds detected with the stability parameters
    pub hold_count: usize,
    /// Hold windows re-tested
    pub hold_windows: usize,
    /// Hold windows that passed
    pub stable_windows: usize,
    /// Fraction of all steadiness windows passing the strict per-axis test
    pub window_steadiness: f64,
    /// Distinct grips detected with the grip parameters
    pub grip_count: usize,
    /// Smoothness in [0, 100]
    pub smoothness: f64,
    /// Median clipped jerk, absent without movement
    pub average_jerk: Option<f64>,
    /// Movement intervals found by the smoothness scorer
    pub movement_intervals: usize,
    /// Large consecutive magnitude deltas
    pub usage_movements: usize,
    /// Debounced movement onsets
    pub movement_onsets: usize,
    /// Samples above the fall threshold
    pub partial_falls: usize,
}

/// Outcome for one limb
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimbReport {
    /// Which limb
    pub limb: Limb,
    /// Figures, or why the limb was left out
    #[serde(flatten)]
    pub outcome: LimbOutcome<LimbMetrics>,
}

/// Grip counts per arm; `None` when that arm was excluded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GripCounts {
    /// Left arm grips
    pub left_arm: Option<usize>,
    /// Right arm grips
    pub right_arm: Option<usize>,
}

/// Final output bundle for one recording
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionMetrics {
    /// Mean hold stability over analyzed limbs, in [0, 1]
    pub stability: Option<f64>,
    /// Grips per arm
    pub grip_counts: GripCounts,
    /// Mean smoothness over analyzed limbs, in [0, 100]
    pub smoothness: Option<f64>,
    /// Inter-onset statistics; `None` with fewer than two onsets
    pub rhythm: Option<RhythmStats>,
    /// Arm/leg usage balance
    pub usage: UsageSummary,
    /// Partial and full falls
    pub falls: FallReport,
    /// Per-limb detail in canonical limb order
    pub limbs: Vec<LimbReport>,
    /// Human readable notes about excluded limbs and undefined metrics
    pub caveats: Vec<String>,
}

impl SessionMetrics {
    /// Limbs that contributed to the aggregates
    #[must_use]
    pub fn analyzed_limbs(&self) -> Vec<Limb> {
        self.limbs
            .iter()
            .filter(|report| report.outcome.is_analyzed())
            .map(|report| report.limb)
            .collect()
    }

    /// Metrics of one limb, if it was analyzed
    #[must_use]
    pub fn limb(&self, limb: Limb) -> Option<&LimbMetrics> {
        self.limbs
            .iter()
            .find(|report| report.limb == limb)
            .and_then(|report| report.outcome.value())
    }
}

/// Per-limb stage output carried into the join
struct LimbAnalysis {
    metrics: LimbMetrics,
    onsets: Vec<LimbEvent>,
    partial_falls: Vec<LimbEvent>,
}

/// Orchestrates loading, per-limb analysis, and cross-limb joins
#[derive(Debug, Clone)]
pub struct SessionAnalyzer {
    config: AnalysisConfig,
}

impl SessionAnalyzer {
    /// Create an analyzer with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the configuration fails validation
    pub fn new(config: AnalysisConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze `left_arm.csv`, `right_arm.csv`, `left_leg.csv`, `right_leg.csv` in a directory
    #[must_use]
    pub fn analyze_directory(&self, session_dir: &Path) -> SessionMetrics {
        info!(session = %session_dir.display(), "analyzing session");
        let inputs: Vec<(Limb, AppResult<LoadedSeries>)> = Limb::ALL
            .as_slice()
            .par_iter()
            .map(|&limb| {
                let path = SeriesLoader::session_path(session_dir, limb);
                (limb, SeriesLoader::load_file(&path, limb))
            })
            .collect();
        self.analyze_loaded(inputs)
    }

    /// Analyze in-memory series; limbs not supplied are reported as missing
    #[must_use]
    pub fn analyze_series(&self, series: Vec<Series>) -> SessionMetrics {
        let mut by_limb: BTreeMap<Limb, Series> =
            series.into_iter().map(|s| (s.limb(), s)).collect();
        let inputs = Limb::ALL
            .iter()
            .map(|&limb| {
                let loaded = by_limb
                    .remove(&limb)
                    .map(|series| LoadedSeries {
                        stats: LoadStats {
                            rows_read: series.len(),
                            ..Default::default()
                        },
                        series,
                    })
                    .ok_or_else(|| AppError::missing_input(format!("no series for {limb}")));
                (limb, loaded)
            })
            .collect();
        self.analyze_loaded(inputs)
    }

    /// Analyze load results, one entry per limb
    #[must_use]
    pub fn analyze_loaded(&self, inputs: Vec<(Limb, AppResult<LoadedSeries>)>) -> SessionMetrics {
        let mut outcomes: Vec<(Limb, LimbOutcome<LimbAnalysis>)> = inputs
            .into_par_iter()
            .map(|(limb, loaded)| (limb, self.limb_outcome(limb, loaded)))
            .collect();
        outcomes.sort_by_key(|(limb, _)| *limb);

        self.join(outcomes)
    }

    fn limb_outcome(
        &self,
        limb: Limb,
        loaded: AppResult<LoadedSeries>,
    ) -> LimbOutcome<LimbAnalysis> {
        let reason = match loaded {
            Ok(loaded) if !loaded.series.is_empty() => {
                return LimbOutcome::Analyzed {
                    value: self.analyze_limb(&loaded),
                };
            }
            Ok(_) => ExclusionReason::Empty,
            Err(error) if error.code == ErrorCode::MissingInput => ExclusionReason::MissingInput,
            Err(error) => ExclusionReason::Unreadable {
                message: error.to_string(),
            },
        };
        warn!(limb = %limb, reason = %reason, "limb excluded from session aggregates");
        LimbOutcome::Excluded { reason }
    }

    fn analyze_limb(&self, loaded: &LoadedSeries) -> LimbAnalysis {
        let series = &loaded.series;
        let config = &self.config;
        let rate = SampleRate::of_series(series);

        let stability = HoldDetector::assess_stability(series, rate, &config.stability);
        let grips = HoldDetector::count_grips(series, rate, &config.grip);
        let steadiness = HoldDetector::window_steadiness(series, rate, &config.steadiness);
        let smoothness = SmoothnessScorer::new(config.smoothness).score(series);
        let usage_movements = UsageAggregator::new(config.usage).count_movements(series);
        let onsets = RhythmAnalyzer::new(config.rhythm).detect_onsets(series);
        let partial_falls = FallDetector::new(config.falls).detect_partial(series);

        debug!(
            limb = %series.limb(),
            samples = series.len(),
            rate_hz = rate.hz(),
            "limb analyzed"
        );

        LimbAnalysis {
            metrics: LimbMetrics {
                sample_count: series.len(),
                rows_dropped: loaded.stats.rows_read - series.len(),
                duration_seconds: round_to(series.duration_seconds(), INTERVAL_DECIMALS),
                sample_rate_hz: round_to(rate.hz(), RATE_DECIMALS),
                stability: stability.score,
                hold_count: stability.holds.len(),
                hold_windows: stability.hold_windows,
                stable_windows: stability.stable_windows,
                window_steadiness: round_to(steadiness, RATIO_DECIMALS),
                grip_count: grips.count,
                smoothness: smoothness.score,
                average_jerk: smoothness.average_jerk.map(|j| round_to(j, RATE_DECIMALS)),
                movement_intervals: smoothness.intervals.len(),
                usage_movements,
                movement_onsets: onsets.len(),
                partial_falls: partial_falls.len(),
            },
            onsets,
            partial_falls,
        }
    }

    fn join(&self, outcomes: Vec<(Limb, LimbOutcome<LimbAnalysis>)>) -> SessionMetrics {
        let analyzed: Vec<(Limb, &LimbAnalysis)> = outcomes
            .iter()
            .filter_map(|(limb, outcome)| outcome.value().map(|analysis| (*limb, analysis)))
            .collect();

        let stability = mean(
            &analyzed
                .iter()
                .map(|(_, a)| a.metrics.stability)
                .collect::<Vec<_>>(),
        )
        .map(|s| round_to(s, RATIO_DECIMALS));
        let smoothness = combine_limb_scores(analyzed.iter().map(|(_, a)| a.metrics.smoothness))
            .map(|s| round_to(s, PERCENT_DECIMALS));

        let grip_for = |limb: Limb| {
            analyzed
                .iter()
                .find(|(l, _)| *l == limb)
                .map(|(_, a)| a.metrics.grip_count)
        };
        let grip_counts = GripCounts {
            left_arm: grip_for(Limb::LeftArm),
            right_arm: grip_for(Limb::RightArm),
        };

        let onsets = merge_by_time(analyzed.iter().map(|(_, a)| a.onsets.clone()));
        let rhythm = RhythmAnalyzer::analyze_events(&onsets).map(round_rhythm);

        let partial_falls = merge_by_time(analyzed.iter().map(|(_, a)| a.partial_falls.clone()));
        let full_falls = FallDetector::new(self.config.falls).detect_full_falls(&partial_falls);
        let falls = FallReport {
            partial_falls,
            full_falls,
        };

        let usage_counts: BTreeMap<Limb, usize> = analyzed
            .iter()
            .map(|(limb, a)| (*limb, a.metrics.usage_movements))
            .collect();
        let usage = UsageAggregator::new(self.config.usage).summarize(&usage_counts);

        let caveats = caveats(&outcomes, analyzed.len(), rhythm.is_none());

        info!(
            analyzed_limbs = analyzed.len(),
            onsets = onsets.len(),
            partial_falls = falls.partial_count(),
            full_falls = falls.full_count(),
            "session analysis complete"
        );

        let limbs = outcomes
            .into_iter()
            .map(|(limb, outcome)| LimbReport {
                limb,
                outcome: outcome.map(|analysis| round_limb(analysis.metrics)),
            })
            .collect();

        SessionMetrics {
            stability,
            grip_counts,
            smoothness,
            rhythm,
            usage,
            falls,
            limbs,
            caveats,
        }
    }
}

fn round_rhythm(stats: RhythmStats) -> RhythmStats {
    RhythmStats {
        mean_interval: round_to(stats.mean_interval, INTERVAL_DECIMALS),
        std_interval: round_to(stats.std_interval, INTERVAL_DECIMALS),
        rhythm_score: round_to(stats.rhythm_score, INTERVAL_DECIMALS),
        onset_count: stats.onset_count,
    }
}

fn round_limb(metrics: LimbMetrics) -> LimbMetrics {
    LimbMetrics {
        stability: round_to(metrics.stability, RATIO_DECIMALS),
        smoothness: round_to(metrics.smoothness, PERCENT_DECIMALS),
        ..metrics
    }
}

fn caveats(
    outcomes: &[(Limb, LimbOutcome<LimbAnalysis>)],
    analyzed: usize,
    rhythm_undefined: bool,
) -> Vec<String> {
    let mut notes: Vec<String> = outcomes
        .iter()
        .filter_map(|(limb, outcome)| match outcome {
            LimbOutcome::Excluded { reason } => Some(format!(
                "{} excluded from aggregates: {reason}",
                limb.display_name()
            )),
            LimbOutcome::Analyzed { .. } => None,
        })
        .collect();

    if rhythm_undefined {
        notes.push("Rhythm undefined: fewer than two movement onsets across all limbs".to_owned());
    }
    if analyzed < Limb::ALL.len() {
        notes.push(format!(
            "Full-fall detection requires all four limbs; only {analyzed} analyzed"
        ));
    }
    notes
}
