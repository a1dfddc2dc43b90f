use crate::error::{ClimateError, Result};
use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` date parameter.
///
/// Used for caller-supplied dates; anything that does not parse is an
/// `InvalidDate` error carrying the offending value.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ClimateError::InvalidDate {
        value: value.to_string(),
    })
}
