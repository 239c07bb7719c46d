// ABOUTME: Series loader reading per-limb CSV recordings into validated in-memory series
// ABOUTME: Locates columns by header name, skips malformed rows, and writes the same format back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Series Loader
//!
//! One CSV file per limb with a `timestamp` column, `accX..accZ`, `gyroX..gyroZ`
//! and optionally `magX..magZ`. Columns are matched by header name so extra
//! columns and any column order are accepted. Rows that fail to parse a
//! required field are dropped without raising an error; the count is kept in
//! [`LoadStats`] for diagnostics only.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use climb_core::constants::format::{ACCEL_COLUMNS, GYRO_COLUMNS, MAG_COLUMNS, TIMESTAMP_COLUMN};
use climb_core::{AppError, AppResult, Limb, Sample, Series, Vec3};
use csv::{ReaderBuilder, StringRecord, Trim, Writer};
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Naive timestamp layouts accepted in addition to RFC 3339
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Row accounting for one loaded file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Data rows present in the file
    pub rows_read: usize,
    /// Rows dropped because a required field did not parse
    pub rows_malformed: usize,
    /// Rows dropped because their timestamp went backwards
    pub rows_out_of_order: usize,
    /// Whether magnetometer columns were present
    pub has_magnetometer: bool,
}

impl LoadStats {
    /// Rows that made it into the series
    #[must_use]
    pub const fn rows_kept(&self) -> usize {
        self.rows_read - self.rows_malformed - self.rows_out_of_order
    }
}

/// A series together with how it was loaded
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    /// The validated series
    pub series: Series,
    /// Row accounting
    pub stats: LoadStats,
}

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    timestamp: usize,
    accel: [usize; 3],
    gyro: [usize; 3],
    mag: Option<[usize; 3]>,
}

impl ColumnLayout {
    fn resolve(headers: &StringRecord) -> AppResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                AppError::malformed_input(format!("missing required column '{name}'"))
                    .with_details(json!({ "column": name }))
            })
        };
        let require_axes = |names: [&str; 3]| -> AppResult<[usize; 3]> {
            Ok([require(names[0])?, require(names[1])?, require(names[2])?])
        };

        let mag = match (find(MAG_COLUMNS[0]), find(MAG_COLUMNS[1]), find(MAG_COLUMNS[2])) {
            (Some(x), Some(y), Some(z)) => Some([x, y, z]),
            _ => None,
        };

        Ok(Self {
            timestamp: require(TIMESTAMP_COLUMN)?,
            accel: require_axes(ACCEL_COLUMNS)?,
            gyro: require_axes(GYRO_COLUMNS)?,
            mag,
        })
    }

    fn parse_row(&self, record: &StringRecord) -> Option<Sample> {
        let timestamp = parse_timestamp(record.get(self.timestamp)?)?;
        let accel = axes(record, self.accel)?;
        let gyro = axes(record, self.gyro)?;
        Some(Sample {
            mag: self.mag.and_then(|columns| axes(record, columns)),
            ..Sample::new(timestamp, accel, gyro)
        })
    }
}

fn axes(record: &StringRecord, columns: [usize; 3]) -> Option<Vec3> {
    let value = |i: usize| {
        record
            .get(columns[i])
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    };
    Some(Vec3::new(value(0)?, value(1)?, value(2)?))
}

/// Parse an RFC 3339 timestamp, or a naive ISO-8601 one interpreted as UTC
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// CSV series reader and writer
pub struct SeriesLoader;

impl SeriesLoader {
    /// Path of a limb's series inside a session directory
    #[must_use]
    pub fn session_path(session_dir: &Path, limb: Limb) -> PathBuf {
        session_dir.join(limb.file_name())
    }

    /// Load one limb's series from disk
    ///
    /// # Errors
    ///
    /// Returns `MissingInput` when the file does not exist and `MalformedInput`
    /// when the header lacks a required column or the file is not valid CSV
    pub fn load_file(path: &Path, limb: Limb) -> AppResult<LoadedSeries> {
        let file = File::open(path).map_err(|e| {
            AppError::from(e).with_details(json!({ "path": path.display().to_string() }))
        })?;
        let loaded = Self::load_reader(file, limb)?;

        debug!(
            limb = %limb,
            path = %path.display(),
            rows = loaded.stats.rows_read,
            malformed = loaded.stats.rows_malformed,
            out_of_order = loaded.stats.rows_out_of_order,
            "series loaded"
        );
        Ok(loaded)
    }

    /// Load one limb's series from any CSV source
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` when the header cannot be read or lacks a required column
    pub fn load_reader<R: Read>(reader: R, limb: Limb) -> AppResult<LoadedSeries> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| AppError::malformed_input(format!("unreadable header: {e}")))?
            .clone();
        let layout = ColumnLayout::resolve(&headers)?;

        let mut stats = LoadStats {
            has_magnetometer: layout.mag.is_some(),
            ..LoadStats::default()
        };
        let mut samples = Vec::new();
        for record in reader.records() {
            stats.rows_read += 1;
            match record.ok().and_then(|r| layout.parse_row(&r)) {
                Some(sample) => samples.push(sample),
                None => stats.rows_malformed += 1,
            }
        }

        let parsed = samples.len();
        let series = Series::new(limb, samples);
        stats.rows_out_of_order = parsed - series.len();

        Ok(LoadedSeries { series, stats })
    }

    /// Write a series in the persisted format
    ///
    /// Magnetometer columns are written when every sample carries a reading.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the writer fails
    pub fn write_series<W: Write>(series: &Series, writer: W) -> AppResult<()> {
        let with_mag = !series.is_empty() && series.samples().iter().all(|s| s.mag.is_some());
        let mut writer = Writer::from_writer(writer);

        let mut header = vec![TIMESTAMP_COLUMN];
        header.extend(ACCEL_COLUMNS);
        header.extend(GYRO_COLUMNS);
        if with_mag {
            header.extend(MAG_COLUMNS);
        }
        writer.write_record(&header).map_err(csv_storage_error)?;

        for sample in series.samples() {
            let mut row = vec![sample.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)];
            row.extend(sample.accel.axes().iter().map(f64::to_string));
            row.extend(sample.gyro.axes().iter().map(f64::to_string));
            if let (true, Some(mag)) = (with_mag, sample.mag) {
                row.extend(mag.axes().iter().map(f64::to_string));
            }
            writer.write_record(&row).map_err(csv_storage_error)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write a series to `<session_dir>/<limb>.csv`
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the file cannot be created or written
    pub fn write_session_file(session_dir: &Path, series: &Series) -> AppResult<PathBuf> {
        let path = Self::session_path(session_dir, series.limb());
        let file = File::create(&path)?;
        Self::write_series(series, file)?;
        Ok(path)
    }
}

fn csv_storage_error(error: csv::Error) -> AppError {
    AppError::storage(format!("csv write failed: {error}")).with_source(error)
}
