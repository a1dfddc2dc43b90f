pub mod climate_analyzer;
pub mod window;

pub use climate_analyzer::{
    ClimateAnalyzer, DailyPrecipitation, DatasetSummary, StationObservation, TemperatureRange,
};
pub use window::DateWindow;
