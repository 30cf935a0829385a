//! Inbound prediction request model

use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
///
/// Soil fields are optional at the serde level so that an absent field is
/// reported by name instead of failing deserialization of the whole body.
/// The uppercase `N`/`P`/`K` keys match the trained model's column names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// City to look up via the weather provider.
    pub city: Option<String>,

    /// Per-request weather API key, overrides the configured one.
    pub api_key: Option<String>,

    /// Manual temperature override in Celsius.
    pub temperature: Option<f64>,

    /// Manual relative humidity override in percent.
    pub humidity: Option<f64>,

    /// Soil nitrogen level.
    #[serde(rename = "N")]
    pub n: Option<f64>,

    /// Soil phosphorus level.
    #[serde(rename = "P")]
    pub p: Option<f64>,

    /// Soil potassium level.
    #[serde(rename = "K")]
    pub k: Option<f64>,

    /// Soil pH.
    pub ph: Option<f64>,

    /// Rainfall in mm.
    pub rainfall: Option<f64>,
}

impl PredictionRequest {
    /// True when the body carried no recognized field at all, e.g. `{}`.
    pub fn is_empty(&self) -> bool {
        self.city.is_none()
            && self.api_key.is_none()
            && self.temperature.is_none()
            && self.humidity.is_none()
            && self.n.is_none()
            && self.p.is_none()
            && self.k.is_none()
            && self.ph.is_none()
            && self.rainfall.is_none()
    }
}
