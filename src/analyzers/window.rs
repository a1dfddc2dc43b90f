use crate::error::Result;
use crate::store::ClimateStore;
use chrono::{Duration, NaiveDate};

/// Trailing observation window ending at the most recent measurement date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub reference: NaiveDate,
}

impl DateWindow {
    /// Window covering the 365 days up to the latest observed date.
    ///
    /// Exactly 365 calendar days regardless of leap years. Resolved fresh
    /// on every call so it always reflects the current store contents.
    /// Fails with `NoData` when the measurement relation is empty.
    pub fn trailing_year(store: &ClimateStore) -> Result<Self> {
        let reference = store.latest_measurement_date()?;
        let start = reference - Duration::days(365);
        Ok(Self { start, reference })
    }
}
