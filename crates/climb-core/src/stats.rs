// ABOUTME: Numeric helpers shared by the motion analytics detectors
// ABOUTME: Mean, population and sample standard deviation, median, and display rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Small statistics toolkit. All helpers return `None` rather than NaN when the
//! input is too short to define the statistic.

use std::cmp::Ordering;

/// Arithmetic mean
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: sample counts are far below 2^52
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by n)
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn std_population(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Sample standard deviation (divides by n - 1)
///
/// A single observation has no spread, so it yields 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn std_sample(values: &[f64]) -> Option<f64> {
    match values.len() {
        0 => None,
        1 => Some(0.0),
        n => {
            let avg = mean(values)?;
            let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / (n - 1) as f64;
            Some(variance.sqrt())
        }
    }
}

/// Median, averaging the two middle values for even lengths
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Mean absolute deviation of `values` from a fixed `baseline`
#[must_use]
pub fn mean_abs_deviation_from(values: &[f64], baseline: f64) -> Option<f64> {
    let deviations: Vec<f64> = values.iter().map(|v| (v - baseline).abs()).collect();
    mean(&deviations)
}

/// Round to a fixed number of decimals; non-finite values pass through unchanged
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs() {
        assert!(mean(&[]).is_none());
        assert!(std_population(&[]).is_none());
        assert!(std_sample(&[]).is_none());
        assert!(median(&[]).is_none());
    }

    #[test]
    fn test_std_variants() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_population(&values).unwrap() - 2.0).abs() < 1e-12);
        assert!((std_sample(&values).unwrap() - 2.138_089_935).abs() < 1e-6);
        assert!((std_sample(&[3.0]).unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_even_and_odd() {
        assert!((median(&[5.0, 1.0, 3.0]).unwrap() - 3.0).abs() < f64::EPSILON);
        assert!((median(&[4.0, 1.0, 3.0, 2.0]).unwrap() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(0.123_456, 3) - 0.123).abs() < f64::EPSILON);
        assert!((round_to(87.25, 1) - 87.3).abs() < 1e-9);
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }

    #[test]
    fn test_mean_abs_deviation() {
        let mad = mean_abs_deviation_from(&[0.5, 1.5, 1.0], 1.0).unwrap();
        assert!((mad - 1.0 / 3.0).abs() < 1e-12);
    }
}
