// ABOUTME: Fixed-duration, non-overlapping window partitioning of a sample series
// ABOUTME: Shared by hold stability, grip counting, and window steadiness detectors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Windowing engine.
//!
//! Window length in samples is `max(1, floor(duration * rate))`; the trailing
//! remainder shorter than one window is dropped.

use crate::sample_rate::SampleRate;
use climb_core::stats::std_population;
use climb_core::Sample;

/// A contiguous slice of a series
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    index: usize,
    offset: usize,
    samples: &'a [Sample],
}

impl<'a> Window<'a> {
    /// Position of this window in the partition
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Index of the first sample within the series
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Samples covered by this window
    #[must_use]
    pub const fn samples(&self) -> &'a [Sample] {
        self.samples
    }

    /// Acceleration magnitudes
    #[must_use]
    pub fn accel_magnitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.accel.magnitude()).collect()
    }

    /// Angular velocity magnitudes
    #[must_use]
    pub fn gyro_magnitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.gyro.magnitude()).collect()
    }

    /// Whether every acceleration and angular velocity axis has a population
    /// standard deviation strictly below its threshold
    #[must_use]
    pub fn per_axis_std_below(&self, accel_threshold: f64, gyro_threshold: f64) -> bool {
        (0..3).all(|axis| {
            let accel: Vec<f64> = self.samples.iter().map(|s| s.accel.axes()[axis]).collect();
            let gyro: Vec<f64> = self.samples.iter().map(|s| s.gyro.axes()[axis]).collect();
            std_population(&accel).is_some_and(|std| std < accel_threshold)
                && std_population(&gyro).is_some_and(|std| std < gyro_threshold)
        })
    }
}

/// Number of samples per window for a duration at a given rate
#[must_use]
pub fn window_len(duration_seconds: f64, rate: SampleRate) -> usize {
    rate.samples_in(duration_seconds)
}

/// Partition samples into non-overlapping windows of `duration_seconds`
///
/// Returns no windows for an empty series or one shorter than a single window.
#[must_use]
pub fn partition(samples: &[Sample], duration_seconds: f64, rate: SampleRate) -> Vec<Window<'_>> {
    let len = window_len(duration_seconds, rate);
    samples
        .chunks_exact(len)
        .enumerate()
        .map(|(index, chunk)| Window {
            index,
            offset: index * len,
            samples: chunk,
        })
        .collect()
}
