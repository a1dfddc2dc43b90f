use crate::error::{ClimateError, Result};
use crate::models::{Measurement, Station};
use crate::readers::{MeasurementReader, StationReader};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;

pub const STATIONS_FILE: &str = "stations.csv";
pub const MEASUREMENTS_FILE: &str = "measurements.csv";

/// Read-only handle over the two dataset relations.
///
/// Constructed once at startup and shared by reference thereafter; nothing
/// mutates it, so concurrent queries need no locking.
pub struct ClimateStore {
    stations: Vec<Station>,
    measurements: Vec<Measurement>,
}

impl ClimateStore {
    pub fn new(stations: Vec<Station>, measurements: Vec<Measurement>) -> Self {
        Self {
            stations,
            measurements,
        }
    }

    /// Load both relations from `stations.csv` and `measurements.csv` in
    /// the given directory.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let stations_path = dir.join(STATIONS_FILE);
        let measurements_path = dir.join(MEASUREMENTS_FILE);

        for path in [&stations_path, &measurements_path] {
            if !path.exists() {
                return Err(ClimateError::Config(format!(
                    "Dataset file not found: {}",
                    path.display()
                )));
            }
        }

        let stations = StationReader::new().read_stations(&stations_path)?;
        let measurements = MeasurementReader::new().read_measurements(&measurements_path)?;

        Ok(Self::new(stations, measurements))
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Full measurement scan in input order.
    pub fn scan(&self) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter()
    }

    /// Measurements with `date >= lower`, in input order.
    pub fn scan_from(&self, lower: NaiveDate) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(move |m| m.date >= lower)
    }

    /// Measurements with `date >= lower` and, when given, `date <= upper`.
    pub fn scan_range(
        &self,
        lower: NaiveDate,
        upper: Option<NaiveDate>,
    ) -> impl Iterator<Item = &Measurement> {
        self.measurements
            .iter()
            .filter(move |m| m.date >= lower && upper.map_or(true, |u| m.date <= u))
    }

    /// Date of the most recent measurement.
    ///
    /// Fails with `NoData` on an empty relation rather than faulting; the
    /// caller decides how to surface that.
    pub fn latest_measurement_date(&self) -> Result<NaiveDate> {
        self.measurements
            .iter()
            .map(|m| m.date)
            .max()
            .ok_or(ClimateError::NoData)
    }
}

/// Count rows per group key.
pub fn group_count<T, K, F>(rows: impl IntoIterator<Item = T>, key_of: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut counts = HashMap::new();
    for row in rows {
        *counts.entry(key_of(&row)).or_insert(0) += 1;
    }
    counts
}

/// Average an optional per-row value per group key.
///
/// SQL AVG semantics: rows whose value is absent are excluded from the
/// average, and a group with no present values reports `None` while still
/// appearing in the result.
pub fn group_average<T, K, KF, VF>(
    rows: impl IntoIterator<Item = T>,
    key_of: KF,
    value_of: VF,
) -> HashMap<K, Option<f64>>
where
    K: Eq + Hash,
    KF: Fn(&T) -> K,
    VF: Fn(&T) -> Option<f64>,
{
    let mut sums: HashMap<K, (f64, usize)> = HashMap::new();
    for row in rows {
        let entry = sums.entry(key_of(&row)).or_insert((0.0, 0));
        if let Some(value) = value_of(&row) {
            entry.0 += value;
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(key, (sum, count))| {
            let average = if count > 0 {
                Some(sum / count as f64)
            } else {
                None
            };
            (key, average)
        })
        .collect()
}
