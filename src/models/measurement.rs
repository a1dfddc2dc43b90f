use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One observation record for a station on a date.
///
/// `prcp` is nullable: an absent reading means no measurement was taken,
/// not zero precipitation. `station` is not enforced as a hard foreign key
/// and may reference a code missing from the station table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub id: u32,
    pub station: String,
    pub date: NaiveDate,
    pub prcp: Option<f64>,
    pub tobs: i32,
}

impl Measurement {
    pub fn new(id: u32, station: String, date: NaiveDate, prcp: Option<f64>, tobs: i32) -> Self {
        Self {
            id,
            station,
            date,
            prcp,
            tobs,
        }
    }
}
