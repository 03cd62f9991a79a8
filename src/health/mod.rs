//! Liveness reporting.
//!
//! `GET /health` pings the document store and answers 200 `{"status":"ok"}`
//! when it responds, 503 otherwise.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use crate::http::response::ApiError;
use crate::http::server::AppState;

const STORE_UNREACHABLE: &str = "document store unreachable";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Json<HealthStatus>, ApiError> {
    state.store.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Health check failed");
        ApiError::unavailable(STORE_UNREACHABLE)
    })?;

    Ok(Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
