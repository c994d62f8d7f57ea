//! Health and status endpoints.

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// Artifacts with a cached loader (resolved or not).
    pub cached_webjars: usize,
}

/// Serve `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "webjars server is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        cached_webjars: state.assets.webjars().len().await,
    })
}
