//! Resolved weather reading

use serde::{Deserialize, Serialize};

/// Where a weather reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherSource {
    /// Fetched from the weather provider.
    Provider,
    /// Supplied by the caller as a manual override.
    Manual,
}

/// A resolved temperature/humidity pair. Immutable once resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    pub source: WeatherSource,
}

impl WeatherReading {
    pub fn from_provider(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
            source: WeatherSource::Provider,
        }
    }

    pub fn manual(temperature: f64, humidity: f64) -> Self {
        Self {
            temperature,
            humidity,
            source: WeatherSource::Manual,
        }
    }
}
