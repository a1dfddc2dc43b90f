use crate::analyzers::ClimateAnalyzer;
use crate::error::Result;
use crate::projection::{
    project_observation, project_precipitation, project_station, project_temperature_range,
    FieldRecord,
};
use crate::store::ClimateStore;
use crate::utils::parse_iso_date;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;

pub fn router(store: Arc<ClimateStore>) -> Router {
    Router::new()
        .route("/", get(index))
        .nest("/api/v1.0", api_router())
        .with_state(store)
}

fn api_router() -> Router<Arc<ClimateStore>> {
    Router::new()
        .route("/precipitation", get(precipitation))
        .route("/stations", get(stations))
        .route("/tobs", get(tobs))
        .route("/range/{start_date}", get(range_from))
        .route("/range/{start_date}/{end_date}", get(range_between))
}

async fn index() -> Json<Value> {
    Json(json!({
        "service": "climate-api",
        "routes": [
            "/api/v1.0/precipitation",
            "/api/v1.0/stations",
            "/api/v1.0/tobs",
            "/api/v1.0/range/{start_date}",
            "/api/v1.0/range/{start_date}/{end_date}",
        ],
    }))
}

async fn precipitation(
    State(store): State<Arc<ClimateStore>>,
) -> Result<Json<Vec<FieldRecord>>> {
    let series = ClimateAnalyzer::new(&store).precipitation_series()?;
    tracing::debug!("Precipitation series has {} dates", series.len());

    Ok(Json(series.iter().map(project_precipitation).collect()))
}

async fn stations(State(store): State<Arc<ClimateStore>>) -> Json<Vec<FieldRecord>> {
    Json(store.stations().iter().map(project_station).collect())
}

async fn tobs(State(store): State<Arc<ClimateStore>>) -> Result<Json<Vec<FieldRecord>>> {
    let observations = ClimateAnalyzer::new(&store).most_active_station_temperatures()?;
    tracing::debug!("Most-active station has {} observations", observations.len());

    Ok(Json(observations.iter().map(project_observation).collect()))
}

async fn range_from(
    State(store): State<Arc<ClimateStore>>,
    Path(start_date): Path<String>,
) -> Result<Json<FieldRecord>> {
    let start = parse_iso_date(&start_date)?;
    let range = ClimateAnalyzer::new(&store).temperature_range(start, None)?;

    Ok(Json(project_temperature_range(range.as_ref())))
}

async fn range_between(
    State(store): State<Arc<ClimateStore>>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> Result<Json<FieldRecord>> {
    let start = parse_iso_date(&start_date)?;
    let end = parse_iso_date(&end_date)?;
    let range = ClimateAnalyzer::new(&store).temperature_range(start, Some(end))?;

    Ok(Json(project_temperature_range(range.as_ref())))
}
