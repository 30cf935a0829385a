//! Prediction result models

use serde::{Deserialize, Serialize};

use crate::models::WeatherReading;

/// One crop label with its raw probability in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassProbability {
    pub crop: String,
    pub probability: f64,
}

/// A ranked crop with its confidence scaled to percent, rounded to
/// 2 decimal places for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropScore {
    pub crop: String,
    pub probability: f64,
}

/// Echo of the soil inputs used for the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilInputs {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub ph: f64,
    pub rainfall: f64,
}

/// Successful response of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// City from the request, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The weather reading the prediction was made with.
    pub weather: WeatherReading,

    /// The soil inputs the prediction was made with.
    pub soil: SoilInputs,

    /// Top-1 crop label.
    pub prediction: String,

    /// Full class-probability distribution in the classifier's native
    /// label order.
    pub distribution: Vec<ClassProbability>,

    /// The 3 highest-probability crops, percent-scaled.
    pub top3: Vec<CropScore>,
}
