//! Canonical feature vector fed to the classifier

use serde::{Deserialize, Serialize};

/// Column names in the exact order the model was trained against.
pub const FEATURE_COLUMNS: [&str; 7] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// The 7-dimensional input to the crop classifier.
///
/// Column order is a hard contract: the model was trained against
/// `[N, P, K, temperature, humidity, ph, rainfall]` and any reordering
/// silently corrupts predictions. `as_array` is the single place that
/// order is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
}

impl FeatureVector {
    /// The vector in canonical column order.
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}
