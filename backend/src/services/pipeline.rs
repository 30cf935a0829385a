//! Request orchestration: resolve, assemble, classify, rank
//!
//! Runs the stages in strict sequence and short-circuits on the first
//! failure. The only intentional local recovery is inside weather
//! resolution, where a provider failure falls back to manual values.

use std::sync::Arc;

use shared::{assemble_features, PredictionRequest, PredictionResult, SoilInputs};

use crate::classifier::Classifier;
use crate::error::{AppError, AppResult};
use crate::services::{ranking, WeatherResolver};

/// Runs the full prediction pipeline for one request.
pub struct RequestPipeline {
    resolver: WeatherResolver,
    classifier: Arc<dyn Classifier>,
}

impl RequestPipeline {
    pub fn new(resolver: WeatherResolver, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            resolver,
            classifier,
        }
    }

    /// Execute the pipeline for `request`.
    pub async fn run(&self, request: PredictionRequest) -> AppResult<PredictionResult> {
        if request.is_empty() {
            return Err(AppError::MalformedInput("No input data provided".to_string()));
        }

        let weather = self
            .resolver
            .resolve(
                request.city.as_deref(),
                request.api_key.as_deref(),
                request.temperature,
                request.humidity,
            )
            .await?;

        let features = assemble_features(&request, &weather)?;

        let prediction = self
            .classifier
            .predict_label(&features)
            .map_err(|e| AppError::ClassifierFailure(e.to_string()))?;
        let distribution = self
            .classifier
            .predict_distribution(&features)
            .map_err(|e| AppError::ClassifierFailure(e.to_string()))?;
        let top3 = ranking::rank(&distribution);

        tracing::info!(prediction = %prediction, source = ?weather.source, "prediction served");

        Ok(PredictionResult {
            city: request.city,
            weather,
            soil: SoilInputs {
                n: features.n,
                p: features.p,
                k: features.k,
                ph: features.ph,
                rainfall: features.rainfall,
            },
            prediction,
            distribution,
            top3,
        })
    }
}
