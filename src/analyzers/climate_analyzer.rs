use crate::analyzers::window::DateWindow;
use crate::error::{ClimateError, Result};
use crate::store::{self, ClimateStore};
use chrono::NaiveDate;

/// Average precipitation across all stations reporting on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPrecipitation {
    pub date: NaiveDate,
    pub average_prcp: Option<f64>,
}

/// One temperature observation attributed to its station.
#[derive(Debug, Clone, PartialEq)]
pub struct StationObservation {
    pub station: String,
    pub tobs: i32,
}

/// Temperature extremes and mean over a date-filtered set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub min: i32,
    pub avg: f64,
    pub max: i32,
}

#[derive(Debug)]
pub struct DatasetSummary {
    pub total_measurements: usize,
    pub total_stations: usize,
    pub date_range: (NaiveDate, NaiveDate),
    pub most_active_station: String,
}

impl DatasetSummary {
    pub fn summary(&self) -> String {
        format!(
            "Stations: {} stations\n\
            Records: {} measurements\n\
            Date Range: {} to {}\n\
            Most Active Station: {}",
            self.total_stations,
            self.total_measurements,
            self.date_range.0,
            self.date_range.1,
            self.most_active_station,
        )
    }
}

/// Query operations over a read-only [`ClimateStore`].
pub struct ClimateAnalyzer<'a> {
    store: &'a ClimateStore,
}

impl<'a> ClimateAnalyzer<'a> {
    pub fn new(store: &'a ClimateStore) -> Self {
        Self { store }
    }

    /// Per-date average precipitation over the trailing 365-day window,
    /// ascending by date.
    ///
    /// Averages are over non-missing readings only. A date whose readings
    /// are all missing is still emitted, with no average.
    pub fn precipitation_series(&self) -> Result<Vec<DailyPrecipitation>> {
        let window = DateWindow::trailing_year(self.store)?;

        let averages = store::group_average(
            self.store.scan_from(window.start),
            |m| m.date,
            |m| m.prcp,
        );

        let mut series: Vec<DailyPrecipitation> = averages
            .into_iter()
            .map(|(date, average_prcp)| DailyPrecipitation { date, average_prcp })
            .collect();
        series.sort_by_key(|entry| entry.date);

        Ok(series)
    }

    /// Station with the highest measurement count across the whole relation.
    ///
    /// Ties break to the lexicographically smallest station code. Fails
    /// with `NoData` when there are no measurements to rank.
    pub fn most_active_station(&self) -> Result<String> {
        let counts = store::group_count(self.store.scan(), |m| m.station.clone());

        counts
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
            .map(|(station, _)| station)
            .ok_or(ClimateError::NoData)
    }

    /// Temperature observations of the most-active station over the
    /// trailing 365-day window, in input scan order.
    pub fn most_active_station_temperatures(&self) -> Result<Vec<StationObservation>> {
        let station = self.most_active_station()?;
        let window = DateWindow::trailing_year(self.store)?;

        Ok(self
            .store
            .scan_from(window.start)
            .filter(|m| m.station == station)
            .map(|m| StationObservation {
                station: m.station.clone(),
                tobs: m.tobs,
            })
            .collect())
    }

    /// Min/avg/max observed temperature over `date >= start`, bounded above
    /// by `end` when given, computed in one pass.
    ///
    /// `Ok(None)` when no rows matched; an inverted range (`end < start`)
    /// is simply empty, never an error.
    pub fn temperature_range(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Option<TemperatureRange>> {
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        let mut sum = 0i64;
        let mut count = 0usize;

        for measurement in self.store.scan_range(start, end) {
            min = min.min(measurement.tobs);
            max = max.max(measurement.tobs);
            sum += measurement.tobs as i64;
            count += 1;
        }

        if count == 0 {
            return Ok(None);
        }

        Ok(Some(TemperatureRange {
            min,
            avg: sum as f64 / count as f64,
            max,
        }))
    }

    /// Whole-dataset overview used by the CLI `info` command.
    pub fn dataset_summary(&self) -> Result<DatasetSummary> {
        let mut dates = self.store.scan().map(|m| m.date);
        let first = dates.next().ok_or(ClimateError::NoData)?;
        let (min_date, max_date) = dates.fold((first, first), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        });

        Ok(DatasetSummary {
            total_measurements: self.store.measurements().len(),
            total_stations: self.store.stations().len(),
            date_range: (min_date, max_date),
            most_active_station: self.most_active_station()?,
        })
    }
}
