//! HTTP handler for the prediction endpoint

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};

use shared::{PredictionRequest, PredictionResult};

use crate::error::{AppError, AppResult};
use crate::services::{RequestPipeline, WeatherResolver};
use crate::AppState;

/// `POST /predict`
///
/// A missing or unparseable body surfaces as a 400 with the rejection's
/// message instead of axum's plain-text default.
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> AppResult<Json<PredictionResult>> {
    let Json(request) = payload.map_err(|e| AppError::MalformedInput(e.body_text()))?;

    let resolver = WeatherResolver::new(
        state.weather.clone(),
        state.config.weather.api_key.clone(),
    );
    let pipeline = RequestPipeline::new(resolver, state.classifier.clone());

    let result = pipeline.run(request).await?;
    Ok(Json(result))
}
