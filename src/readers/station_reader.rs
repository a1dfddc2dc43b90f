use crate::error::Result;
use crate::models::Station;
use serde::Deserialize;
use std::path::Path;

/// Raw row shape of the stations CSV file.
///
/// The source data has no `id` column; ids are assigned from the 1-based
/// row position, matching the primary key the reference dataset used.
#[derive(Debug, Deserialize)]
struct StationRow {
    station: String,
    name: String,
    latitude: f64,
    longitude: f64,
    // Elevation is stored as a float in the source data (e.g. "3.0")
    elevation: f64,
}

pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read station metadata from a CSV file with header
    /// `station,name,latitude,longitude,elevation`.
    pub fn read_stations(&self, path: &Path) -> Result<Vec<Station>> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut stations = Vec::new();

        for (index, row_result) in reader.deserialize::<StationRow>().enumerate() {
            let row = row_result?;
            stations.push(Station::new(
                (index + 1) as u32,
                row.station,
                row.name,
                row.latitude,
                row.longitude,
                row.elevation.round() as i32,
            ));
        }

        Ok(stations)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}
