//! Weather API client for fetching current conditions
//!
//! Integrates with an OpenWeatherMap-compatible endpoint, metric units.
//! One bounded request per call, no retries.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Timeout for a single provider request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures of a single provider call.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Network error or timeout
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status; carries its message field
    #[error("{0}")]
    Provider(String),

    /// Provider answered 200 but the body did not parse
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Current conditions extracted from the provider response.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

/// Provider response for current weather; only the fields we consume.
#[derive(Debug, Deserialize)]
struct OwmCurrentResponse {
    main: OwmMain,
}

#[derive(Debug, Deserialize)]
struct OwmMain {
    temp: f64,
    humidity: f64,
}

/// Provider error body for non-success statuses.
#[derive(Debug, Deserialize)]
struct OwmErrorBody {
    message: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient against the given base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch current temperature and humidity for a city.
    pub async fn current_conditions(
        &self,
        city: &str,
        api_key: &str,
    ) -> Result<Observation, WeatherError> {
        let url = format!("{}/weather", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<OwmErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| format!("provider returned status {}", status));
            return Err(WeatherError::Provider(message));
        }

        let data: OwmCurrentResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::MalformedResponse(e.to_string()))?;

        Ok(Observation {
            temperature: data.main.temp,
            humidity: data.main.humidity,
        })
    }
}
