use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use climate_api::models::{Measurement, Station};
use climate_api::server::router;
use climate_api::store::ClimateStore;
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn measurement(id: u32, station: &str, d: NaiveDate, prcp: Option<f64>, tobs: i32) -> Measurement {
    Measurement::new(id, station.to_string(), d, prcp, tobs)
}

fn sample_store() -> Arc<ClimateStore> {
    Arc::new(ClimateStore::new(
        vec![
            Station::new(1, "USC1".to_string(), "X".to_string(), 1.0, 2.0, 3),
            Station::new(2, "USC2".to_string(), "Y".to_string(), 4.0, 5.0, 6),
        ],
        vec![
            measurement(1, "USC1", date(2017, 8, 23), Some(0.2), 80),
            measurement(2, "USC1", date(2017, 2, 1), None, 71),
            measurement(3, "USC1", date(2016, 8, 23), Some(0.4), 70),
            measurement(4, "USC2", date(2017, 8, 23), Some(0.4), 76),
        ],
    ))
}

async fn get_json(store: Arc<ClimateStore>, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router(store).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_stations_listing() {
    let (status, body) = get_json(sample_store(), "/api/v1.0/stations").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": 1,
                "station": "USC1",
                "name": "X",
                "latitude": 1.0,
                "longitude": 2.0,
                "elevation": 3
            },
            {
                "id": 2,
                "station": "USC2",
                "name": "Y",
                "latitude": 4.0,
                "longitude": 5.0,
                "elevation": 6
            }
        ])
    );
}

#[tokio::test]
async fn test_precipitation_series() {
    let (status, body) = get_json(sample_store(), "/api/v1.0/precipitation").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 3);

    // Ascending by date; window start 2016-08-23 is inclusive
    assert_eq!(entries[0]["date"], "2016-08-23");
    assert_eq!(entries[0]["average_prcp"], json!(0.4));

    // A date whose readings were all missing keeps a null average
    assert_eq!(entries[1]["date"], "2017-02-01");
    assert_eq!(entries[1]["average_prcp"], Value::Null);

    assert_eq!(entries[2]["date"], "2017-08-23");
    let avg = entries[2]["average_prcp"].as_f64().unwrap();
    assert!((avg - 0.3).abs() < 1e-9);
}

#[tokio::test]
async fn test_tobs_returns_only_most_active_station() {
    let (status, body) = get_json(sample_store(), "/api/v1.0/tobs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "station": "USC1", "tobs": 80 },
            { "station": "USC1", "tobs": 71 },
            { "station": "USC1", "tobs": 70 }
        ])
    );
}

#[tokio::test]
async fn test_range_with_start_only() {
    let store = Arc::new(ClimateStore::new(
        vec![],
        vec![
            measurement(1, "USC1", date(2017, 8, 23), None, 80),
            measurement(2, "USC1", date(2016, 8, 23), None, 70),
        ],
    ));

    let (status, body) = get_json(store, "/api/v1.0/range/2017-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "Min Temp": 80, "Avg Temp": 80.0, "Max Temp": 80 })
    );
}

#[tokio::test]
async fn test_range_with_start_and_end() {
    let (status, body) =
        get_json(sample_store(), "/api/v1.0/range/2016-08-23/2017-02-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Min Temp"], json!(70));
    assert_eq!(body["Max Temp"], json!(71));
    let avg = body["Avg Temp"].as_f64().unwrap();
    assert!((avg - 70.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_inverted_range_is_empty_not_an_error() {
    let (status, body) =
        get_json(sample_store(), "/api/v1.0/range/2017-08-23/2016-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "Min Temp": null, "Avg Temp": null, "Max Temp": null })
    );
}

#[tokio::test]
async fn test_malformed_date_is_a_client_error() {
    let (status, body) = get_json(sample_store(), "/api/v1.0/range/not-a-date").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("not-a-date"));
}

#[tokio::test]
async fn test_empty_dataset_is_service_unavailable() {
    let store = Arc::new(ClimateStore::new(vec![], vec![]));

    let (status, _) = get_json(store.clone(), "/api/v1.0/precipitation").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = get_json(store, "/api/v1.0/tobs").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_index_lists_routes() {
    let (status, body) = get_json(sample_store(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "climate-api");
    assert!(body["routes"]
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r == "/api/v1.0/precipitation"));
}
