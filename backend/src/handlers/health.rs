//! Liveness and info handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of crop labels the loaded classifier knows
    pub crops: usize,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        crops: state.classifier.labels().len(),
    })
}

#[derive(Serialize)]
pub struct InfoResponse {
    pub message: String,
}

/// Root endpoint
pub async fn root() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "Crop Recommendation API is running".to_string(),
    })
}
