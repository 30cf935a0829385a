//! Feature assembly and input validation
//!
//! Combines validated soil fields with a resolved weather reading into the
//! canonical feature vector. Values are deliberately not range-checked:
//! negative rainfall or out-of-range pH pass through uninterpreted, matching
//! the tolerance of the trained model itself.

use thiserror::Error;

use crate::models::{FeatureVector, PredictionRequest, WeatherReading};

/// Failure to assemble a feature vector from a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// A required soil field was absent from the request.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Validate the soil fields of `request` and combine them with `weather`
/// into the fixed 7-column feature vector.
///
/// Fields are checked in column order, so the first missing one is the one
/// named in the error.
pub fn assemble_features(
    request: &PredictionRequest,
    weather: &WeatherReading,
) -> Result<FeatureVector, AssembleError> {
    let n = request.n.ok_or(AssembleError::MissingField("N"))?;
    let p = request.p.ok_or(AssembleError::MissingField("P"))?;
    let k = request.k.ok_or(AssembleError::MissingField("K"))?;
    let ph = request.ph.ok_or(AssembleError::MissingField("ph"))?;
    let rainfall = request.rainfall.ok_or(AssembleError::MissingField("rainfall"))?;

    Ok(FeatureVector {
        n,
        p,
        k,
        temperature: weather.temperature,
        humidity: weather.humidity,
        ph,
        rainfall,
    })
}
