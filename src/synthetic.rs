// ABOUTME: Synthetic four-limb climbing session generator for demos, tests, and benchmarks
// ABOUTME: Produces alternating hold and reach phases with noise and an optional synchronized fall
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Synthetic session generation
//!
//! Every limb cycles through a fixed four-second pattern. Arms reach in turn
//! while legs step between reaches; outside its movement slot a limb holds
//! still with small sensor noise. An optional fall injects a high-g spike on
//! all four limbs within a fraction of a second.

use chrono::{DateTime, Duration, Utc};
use climb_core::{Limb, Sample, Series, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

/// Length of one hold/reach cycle (seconds)
const CYCLE_SECONDS: f64 = 4.0;

/// Acceleration magnitude injected during a fall (g)
const FALL_SPIKE_G: f64 = 12.0;

/// Seconds each limb's fall spike trails the first one
const FALL_LIMB_STAGGER_SECONDS: f64 = 0.05;

/// Generator parameters
#[derive(Debug, Clone, Copy)]
pub struct SyntheticSession {
    /// First sample time
    pub start: DateTime<Utc>,
    /// Recording length (seconds)
    pub duration_seconds: f64,
    /// Samples per second
    pub rate_hz: f64,
    /// Seconds after start at which every limb spikes, if any
    pub fall_at_seconds: Option<f64>,
    /// RNG seed for reproducible noise
    pub seed: u64,
}

impl SyntheticSession {
    /// A one-minute session at 50 Hz without a fall
    #[must_use]
    pub const fn new(start: DateTime<Utc>, seed: u64) -> Self {
        Self {
            start,
            duration_seconds: 60.0,
            rate_hz: 50.0,
            fall_at_seconds: None,
            seed,
        }
    }

    /// Set the recording length
    #[must_use]
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Set the sample rate
    #[must_use]
    pub fn with_rate(mut self, rate_hz: f64) -> Self {
        self.rate_hz = rate_hz;
        self
    }

    /// Inject a synchronized fall
    #[must_use]
    pub fn with_fall_at(mut self, seconds: f64) -> Self {
        self.fall_at_seconds = Some(seconds);
        self
    }

    /// Generate all four limb series
    #[must_use]
    pub fn generate(&self) -> Vec<Series> {
        Limb::ALL.iter().map(|&limb| self.generate_limb(limb)).collect()
    }

    /// Generate one limb's series
    #[must_use]
    pub fn generate_limb(&self, limb: Limb) -> Series {
        let mut rng = StdRng::seed_from_u64(self.seed ^ limb_salt(limb));
        let count = (self.duration_seconds * self.rate_hz).max(0.0) as usize;
        let spike_index = self.fall_at_seconds.map(|t| {
            let at = t + limb_index(limb) as f64 * FALL_LIMB_STAGGER_SECONDS;
            (at * self.rate_hz).round() as usize
        });
        let period = 1.0 / self.rate_hz;

        let samples = (0..count)
            .map(|i| {
                let t = i as f64 * period;
                let micros = (i as f64 * 1_000_000.0 / self.rate_hz).round() as i64;
                let timestamp = self.start + Duration::microseconds(micros);
                let (accel, gyro) = if spike_index == Some(i) {
                    (Vec3::new(0.0, 0.0, FALL_SPIKE_G), Vec3::new(200.0, 150.0, 100.0))
                } else if is_moving(limb, t) {
                    moving_reading(&mut rng, limb, t)
                } else {
                    still_reading(&mut rng)
                };
                Sample {
                    mag: Some(Vec3::new(
                        25.0 + rng.gen_range(-0.5..0.5),
                        -8.0 + rng.gen_range(-0.5..0.5),
                        40.0 + rng.gen_range(-0.5..0.5),
                    )),
                    ..Sample::new(timestamp, accel, gyro)
                }
            })
            .collect();

        Series::new(limb, samples)
    }
}

const fn limb_index(limb: Limb) -> usize {
    match limb {
        Limb::LeftArm => 0,
        Limb::RightArm => 1,
        Limb::LeftLeg => 2,
        Limb::RightLeg => 3,
    }
}

const fn limb_salt(limb: Limb) -> u64 {
    0x9E37_79B9_7F4A_7C15_u64.wrapping_mul(limb_index(limb) as u64 + 1)
}

/// Movement slot of each limb within the cycle
fn is_moving(limb: Limb, t: f64) -> bool {
    let phase = t % CYCLE_SECONDS;
    match limb {
        Limb::LeftArm => (0.0..1.2).contains(&phase),
        Limb::RightArm => (2.0..3.2).contains(&phase),
        Limb::LeftLeg => (1.2..1.8).contains(&phase),
        Limb::RightLeg => (3.2..3.8).contains(&phase),
    }
}

fn still_reading(rng: &mut StdRng) -> (Vec3, Vec3) {
    let accel = Vec3::new(
        rng.gen_range(-0.01..0.01),
        rng.gen_range(-0.01..0.01),
        1.0 + rng.gen_range(-0.01..0.01),
    );
    let gyro = Vec3::new(
        rng.gen_range(-0.5..0.5),
        rng.gen_range(-0.5..0.5),
        rng.gen_range(-0.5..0.5),
    );
    (accel, gyro)
}

fn moving_reading(rng: &mut StdRng, limb: Limb, t: f64) -> (Vec3, Vec3) {
    let (amplitude, frequency) = if limb.is_arm() { (2.2, 1.5) } else { (1.2, 2.0) };
    let angle = TAU * frequency * t;
    let accel = Vec3::new(
        amplitude * angle.sin() + rng.gen_range(-0.05..0.05),
        0.5 * amplitude * angle.cos() + rng.gen_range(-0.05..0.05),
        1.0 + 0.6 * angle.sin() + rng.gen_range(-0.05..0.05),
    );
    let gyro = Vec3::new(
        60.0 * angle.sin() + rng.gen_range(-2.0..2.0),
        40.0 * angle.cos() + rng.gen_range(-2.0..2.0),
        20.0 * angle.sin() + rng.gen_range(-2.0..2.0),
    );
    (accel, gyro)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_sample_count_matches_duration_and_rate() {
        let series = SyntheticSession::new(start(), 7)
            .with_duration(2.0)
            .with_rate(25.0)
            .generate_limb(Limb::LeftLeg);
        assert_eq!(series.len(), 50);
        assert_eq!(series.limb(), Limb::LeftLeg);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let session = SyntheticSession::new(start(), 42).with_duration(1.0);
        assert_eq!(session.generate(), session.generate());
    }

    #[test]
    fn test_fall_spikes_every_limb() {
        let series = SyntheticSession::new(start(), 1)
            .with_duration(10.0)
            .with_fall_at(5.0)
            .generate();
        for limb_series in &series {
            let spikes = limb_series
                .accel_magnitudes()
                .iter()
                .filter(|&&m| m > 10.0)
                .count();
            assert_eq!(spikes, 1, "{}", limb_series.limb());
        }
    }
}
