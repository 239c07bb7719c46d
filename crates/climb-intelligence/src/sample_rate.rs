// ABOUTME: Effective sampling frequency estimation from inter-sample time deltas
// ABOUTME: Produces the single per-series rate that every window-based detector reuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample-rate estimation.
//!
//! The rate is estimated once per series, on the full series, before any
//! windowing. Detectors take a [`SampleRate`] argument instead of timestamps so
//! they cannot re-estimate on a partial slice.

use chrono::{DateTime, Utc};
use climb_core::constants::sensor::FALLBACK_SAMPLE_RATE_HZ;
use climb_core::{elapsed_micros, Series};
use serde::{Deserialize, Serialize};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Absorbs float error when `duration * rate` lands on a whole number
const SAMPLE_COUNT_TOLERANCE: f64 = 1e-9;

/// Estimated sampling frequency of one series, in Hz
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleRate(f64);

impl SampleRate {
    /// Rate used when no estimate can be made
    pub const FALLBACK: Self = Self(FALLBACK_SAMPLE_RATE_HZ);

    /// Wrap a known rate; non-positive or non-finite values become the fallback
    #[must_use]
    pub fn from_hz(hz: f64) -> Self {
        if hz.is_finite() && hz > 0.0 {
            Self(hz)
        } else {
            Self::FALLBACK
        }
    }

    /// Estimate the rate of a loaded series
    #[must_use]
    pub fn of_series(series: &Series) -> Self {
        Self::from_hz(estimate_rate(&series.timestamps()))
    }

    /// Frequency in Hz
    #[must_use]
    pub const fn hz(self) -> f64 {
        self.0
    }

    /// Number of whole samples covering `seconds`, never less than one
    ///
    /// This is `floor(seconds * hz)` after adding a tolerance of `1e-9`, so a
    /// product such as `0.29 * 100.0` (28.999999999999996) that lands just under
    /// a whole number still counts that sample. For realistic durations and
    /// rates the result equals the plain floor.
    #[must_use]
    // Safe: floor of a non-negative finite product
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn samples_in(self, seconds: f64) -> usize {
        let raw = (seconds * self.0 + SAMPLE_COUNT_TOLERANCE).floor();
        if raw.is_finite() && raw >= 1.0 {
            raw as usize
        } else {
            1
        }
    }
}

/// Estimate sampling frequency from capture timestamps
///
/// Inverts the arithmetic mean of consecutive gaps. Fewer than two timestamps,
/// or a non-positive mean gap, yield the 1 Hz fallback.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: gap counts and spans are far below 2^52
pub fn estimate_rate(timestamps: &[DateTime<Utc>]) -> f64 {
    if timestamps.len() < 2 {
        return FALLBACK_SAMPLE_RATE_HZ;
    }

    // Consecutive gaps telescope, so their sum is the first-to-last span
    let total_micros: i64 = timestamps
        .windows(2)
        .map(|pair| elapsed_micros(pair[0], pair[1]))
        .fold(0_i64, i64::saturating_add);
    let mean_gap_micros = total_micros as f64 / (timestamps.len() - 1) as f64;

    if mean_gap_micros > 0.0 {
        MICROS_PER_SECOND / mean_gap_micros
    } else {
        FALLBACK_SAMPLE_RATE_HZ
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ticks(count: i64, step_ms: i64) -> Vec<DateTime<Utc>> {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).single().unwrap();
        (0..count)
            .map(|i| start + Duration::milliseconds(i * step_ms))
            .collect()
    }

    #[test]
    fn test_regular_rate() {
        let rate = estimate_rate(&ticks(101, 20));
        assert!((rate - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_series_fallback() {
        assert!((estimate_rate(&[]) - 1.0).abs() < f64::EPSILON);
        assert!((estimate_rate(&ticks(1, 20)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_identical_timestamps_fallback() {
        assert!((estimate_rate(&ticks(5, 0)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_samples_in_has_floor_of_one() {
        let rate = SampleRate::from_hz(2.0);
        assert_eq!(rate.samples_in(0.25), 1);
        assert_eq!(SampleRate::from_hz(50.0).samples_in(0.25), 12);
    }

    #[test]
    fn test_samples_in_absorbs_float_error_below_whole_count() {
        assert_eq!(SampleRate::from_hz(100.0).samples_in(0.29), 29);
        assert_eq!(SampleRate::from_hz(100.0).samples_in(0.295), 29);
    }

    #[test]
    fn test_invalid_rate_falls_back() {
        assert_eq!(SampleRate::from_hz(-3.0), SampleRate::FALLBACK);
        assert_eq!(SampleRate::from_hz(f64::NAN), SampleRate::FALLBACK);
    }
}
