// ABOUTME: Domain models for body-worn inertial sensor recordings
// ABOUTME: Defines limbs, 3-axis readings, samples, per-limb series, and per-limb outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sensor data models shared by the loader, the analytics engine and the report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Body part a sensor is strapped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Limb {
    /// Left forearm sensor
    LeftArm,
    /// Right forearm sensor
    RightArm,
    /// Left shin sensor
    LeftLeg,
    /// Right shin sensor
    RightLeg,
}

impl Limb {
    /// All four limbs in canonical order
    pub const ALL: [Self; 4] = [Self::LeftArm, Self::RightArm, Self::LeftLeg, Self::RightLeg];

    /// Identifier used in file names and serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftArm => "left_arm",
            Self::RightArm => "right_arm",
            Self::LeftLeg => "left_leg",
            Self::RightLeg => "right_leg",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LeftArm => "Left Arm",
            Self::RightArm => "Right Arm",
            Self::LeftLeg => "Left Leg",
            Self::RightLeg => "Right Leg",
        }
    }

    /// Whether this sensor is worn on an arm
    #[must_use]
    pub const fn is_arm(self) -> bool {
        matches!(self, Self::LeftArm | Self::RightArm)
    }

    /// Persisted series file name for this limb
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Limb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "left_arm" => Ok(Self::LeftArm),
            "right_arm" => Ok(Self::RightArm),
            "left_leg" => Ok(Self::LeftLeg),
            "right_leg" => Ok(Self::RightLeg),
            other => Err(AppError::malformed_input(format!("unknown limb '{other}'"))),
        }
    }
}

/// A 3-axis reading
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    /// X axis
    pub x: f64,
    /// Y axis
    pub y: f64,
    /// Z axis
    pub z: f64,
}

impl Vec3 {
    /// Create a reading from its components
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.z.mul_add(self.z, self.x.mul_add(self.x, self.y * self.y)).sqrt()
    }

    /// Components in x, y, z order
    #[must_use]
    pub const fn axes(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// One timestamped sensor record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Absolute capture time
    pub timestamp: DateTime<Utc>,
    /// Gravity-normalized acceleration
    pub accel: Vec3,
    /// Angular velocity
    pub gyro: Vec3,
    /// Magnetic field, when the sensor reports it
    pub mag: Option<Vec3>,
}

impl Sample {
    /// Create a sample without magnetometer data
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>, accel: Vec3, gyro: Vec3) -> Self {
        Self {
            timestamp,
            accel,
            gyro,
            mag: None,
        }
    }
}

/// Signed microseconds from `from` to `to`, saturating on overflow
#[must_use]
pub fn elapsed_micros(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from)
        .num_microseconds()
        .unwrap_or(if to >= from { i64::MAX } else { i64::MIN })
}

/// Seconds from `from` to `to`, exact to the microsecond
///
/// Differences are taken on integer microseconds before converting, so short
/// gaps keep full precision regardless of how far the timestamps are from the
/// epoch.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: session spans are far below 2^52 microseconds
pub fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    elapsed_micros(from, to) as f64 / 1_000_000.0
}

/// Ordered samples from one limb, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    limb: Limb,
    samples: Vec<Sample>,
}

impl Series {
    /// Build a series, dropping samples whose timestamp goes backwards
    ///
    /// Out-of-order records are discarded rather than reordered so the series
    /// keeps the capture order of the rows that survived.
    #[must_use]
    pub fn new(limb: Limb, samples: Vec<Sample>) -> Self {
        let mut ordered: Vec<Sample> = Vec::with_capacity(samples.len());
        for sample in samples {
            if ordered
                .last()
                .is_some_and(|last| sample.timestamp < last.timestamp)
            {
                continue;
            }
            ordered.push(sample);
        }
        Self {
            limb,
            samples: ordered,
        }
    }

    /// Limb the series was recorded on
    #[must_use]
    pub const fn limb(&self) -> Limb {
        self.limb
    }

    /// Samples in time order
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Capture timestamps in order
    #[must_use]
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.samples.iter().map(|s| s.timestamp).collect()
    }

    /// Acceleration magnitude per sample
    #[must_use]
    pub fn accel_magnitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.accel.magnitude()).collect()
    }

    /// Angular velocity magnitude per sample
    #[must_use]
    pub fn gyro_magnitudes(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.gyro.magnitude()).collect()
    }

    /// Recording span from first to last sample, in seconds
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => elapsed_seconds(first.timestamp, last.timestamp),
            _ => 0.0,
        }
    }
}

/// Why a limb did not contribute to a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    /// The series file does not exist
    MissingInput,
    /// The series file exists but could not be read
    Unreadable {
        /// Loader diagnostic
        message: String,
    },
    /// The file parsed but no usable rows survived
    Empty,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput => f.write_str("series file not found"),
            Self::Unreadable { message } => write!(f, "series file unreadable ({message})"),
            Self::Empty => f.write_str("series contains no usable samples"),
        }
    }
}

/// Per-limb result: a value, or the reason the limb was left out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LimbOutcome<T> {
    /// The limb was analyzed
    Analyzed {
        /// Result for this limb
        value: T,
    },
    /// The limb was excluded from aggregates
    Excluded {
        /// Why the limb was left out
        reason: ExclusionReason,
    },
}

impl<T> LimbOutcome<T> {
    /// Borrow the analyzed value, if any
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Analyzed { value } => Some(value),
            Self::Excluded { .. } => None,
        }
    }

    /// Whether the limb was analyzed
    #[must_use]
    pub const fn is_analyzed(&self) -> bool {
        matches!(self, Self::Analyzed { .. })
    }

    /// Map the analyzed value, keeping exclusions as-is
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LimbOutcome<U> {
        match self {
            Self::Analyzed { value } => LimbOutcome::Analyzed { value: f(value) },
            Self::Excluded { reason } => LimbOutcome::Excluded { reason },
        }
    }
}
