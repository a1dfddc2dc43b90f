pub mod routes;

use crate::error::{ClimateError, Result};
use crate::store::ClimateStore;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub use routes::router;

/// Bind and serve the query API until the process is stopped.
pub async fn run(store: Arc<ClimateStore>, host: &str, port: u16) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(store).layer(cors);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Query API listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

impl IntoResponse for ClimateError {
    fn into_response(self) -> Response {
        let status = match &self {
            ClimateError::InvalidDate { .. } => StatusCode::BAD_REQUEST,
            ClimateError::NoData => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
