//! Error handling for the Crop Recommendation Service
//!
//! Every failure in the request pipeline maps to one of these variants and
//! is converted to a `{"error": <message>}` JSON body at the boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use shared::AssembleError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Body absent, unparseable, or an empty object
    #[error("{0}")]
    MalformedInput(String),

    /// A required soil field was missing from the request
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Weather provider failed and no manual override was given
    #[error("Weather API failed: {0}. Provide 'temperature' and 'humidity' manually.")]
    WeatherUnavailable(String),

    /// Classifier inference failed
    #[error("Classifier error: {0}")]
    ClassifierFailure(String),

    /// Startup or configuration fault surfaced at the request boundary
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<AssembleError> for AppError {
    fn from(err: AssembleError) -> Self {
        match err {
            AssembleError::MissingField(field) => AppError::MissingField(field.to_string()),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedInput(_) | AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::WeatherUnavailable(_)
            | AppError::ClassifierFailure(_)
            | AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!("Request failed: {}", self);

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
