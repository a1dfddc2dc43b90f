use crate::analyzers::{DailyPrecipitation, StationObservation, TemperatureRange};
use crate::models::Station;
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Ordered named-field record for transport.
///
/// Each projection site spells out its field list explicitly; serialization
/// streams the fields in insertion order, so output key order is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRecord {
    fields: Vec<(&'static str, Value)>,
}

impl FieldRecord {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn field(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Date-typed fields are rendered as ISO-8601 strings.
    pub fn date_field(self, name: &'static str, date: NaiveDate) -> Self {
        self.field(name, date.format("%Y-%m-%d").to_string())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for FieldRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for FieldRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

pub fn project_station(station: &Station) -> FieldRecord {
    FieldRecord::new()
        .field("id", station.id)
        .field("station", station.station.as_str())
        .field("name", station.name.as_str())
        .field("latitude", station.latitude)
        .field("longitude", station.longitude)
        .field("elevation", station.elevation)
}

pub fn project_precipitation(entry: &DailyPrecipitation) -> FieldRecord {
    FieldRecord::new()
        .date_field("date", entry.date)
        .field("average_prcp", entry.average_prcp)
}

pub fn project_observation(observation: &StationObservation) -> FieldRecord {
    FieldRecord::new()
        .field("station", observation.station.as_str())
        .field("tobs", observation.tobs)
}

/// Temperature range record with the documented field names; all three
/// aggregates are null when no rows matched.
pub fn project_temperature_range(range: Option<&TemperatureRange>) -> FieldRecord {
    match range {
        Some(range) => FieldRecord::new()
            .field("Min Temp", range.min)
            .field("Avg Temp", range.avg)
            .field("Max Temp", range.max),
        None => FieldRecord::new()
            .field("Min Temp", Value::Null)
            .field("Avg Temp", Value::Null)
            .field("Max Temp", Value::Null),
    }
}
