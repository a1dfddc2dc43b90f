use crate::error::Result;
use crate::models::Measurement;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Raw row shape of the measurements CSV file.
#[derive(Debug, Deserialize)]
struct MeasurementRow {
    station: String,
    date: NaiveDate,
    // Empty field means no reading was taken, not zero precipitation
    prcp: Option<f64>,
    tobs: i32,
}

pub struct MeasurementReader;

impl MeasurementReader {
    pub fn new() -> Self {
        Self
    }

    /// Read observation records from a CSV file with header
    /// `station,date,prcp,tobs`. Dates must be ISO `YYYY-MM-DD`.
    pub fn read_measurements(&self, path: &Path) -> Result<Vec<Measurement>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut measurements = Vec::new();

        for (index, row_result) in reader.deserialize::<MeasurementRow>().enumerate() {
            let row = row_result?;
            measurements.push(Measurement::new(
                (index + 1) as u32,
                row.station,
                row.date,
                row.prcp,
                row.tobs,
            ));
        }

        Ok(measurements)
    }
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}
