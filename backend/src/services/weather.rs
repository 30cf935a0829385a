//! Weather resolution with manual-override fallback
//!
//! Prefers the provider when a city and a usable API key are present.
//! A provider failure is not fatal by itself: it falls through to the
//! caller-supplied temperature/humidity pair, and only when both paths
//! miss does resolution fail.

use shared::WeatherReading;

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;

/// Resolves a weather reading for a single request.
pub struct WeatherResolver {
    client: WeatherClient,
    default_api_key: String,
}

impl WeatherResolver {
    pub fn new(client: WeatherClient, default_api_key: String) -> Self {
        Self {
            client,
            default_api_key,
        }
    }

    /// Resolve temperature and humidity for a request.
    ///
    /// At most one outbound call is made and nothing is retried: a single
    /// provider failure falls straight through to the manual branch.
    pub async fn resolve(
        &self,
        city: Option<&str>,
        api_key: Option<&str>,
        manual_temperature: Option<f64>,
        manual_humidity: Option<f64>,
    ) -> AppResult<WeatherReading> {
        // Per-request key wins over the configured one; empty strings count
        // as absent.
        let key = api_key.filter(|k| !k.is_empty()).or_else(|| {
            if self.default_api_key.is_empty() {
                None
            } else {
                Some(self.default_api_key.as_str())
            }
        });

        let mut provider_error = None;
        if let (Some(city), Some(key)) = (city, key) {
            match self.client.current_conditions(city, key).await {
                Ok(observation) => {
                    tracing::debug!(
                        city,
                        temperature = observation.temperature,
                        humidity = observation.humidity,
                        "weather resolved from provider"
                    );
                    return Ok(WeatherReading::from_provider(
                        observation.temperature,
                        observation.humidity,
                    ));
                }
                Err(e) => {
                    tracing::warn!(city, error = %e, "weather provider failed, trying manual values");
                    provider_error = Some(e.to_string());
                }
            }
        }

        if let (Some(temperature), Some(humidity)) = (manual_temperature, manual_humidity) {
            return Ok(WeatherReading::manual(temperature, humidity));
        }

        Err(AppError::WeatherUnavailable(
            provider_error.unwrap_or_else(|| "no city or API key provided".to_string()),
        ))
    }
}
