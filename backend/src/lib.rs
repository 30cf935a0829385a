//! Crop Recommendation Service - Backend
//!
//! Resolves weather for a request (provider with manual fallback),
//! assembles the fixed-order feature vector, runs the pre-trained crop
//! classifier and ranks the top-3 candidates by confidence.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod classifier;
pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod services;

pub use config::Config;

use classifier::Classifier;
use external::WeatherClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Read-only classifier handle, loaded once at startup
    pub classifier: Arc<dyn Classifier>,
    pub weather: WeatherClient,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/predict", post(handlers::predict))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
