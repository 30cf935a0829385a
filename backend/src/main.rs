//! Crop Recommendation Service - Server entry point

use std::{net::SocketAddr, path::Path, sync::Arc, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crop_backend::{
    classifier::{Classifier, OnnxCropClassifier},
    config::Config,
    create_app,
    external::WeatherClient,
    services::keepalive,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Crop Recommendation Server");
    tracing::info!("Environment: {}", config.environment);

    // Load the classifier once; it is shared read-only across requests
    tracing::info!("Loading classifier from {}", config.model.path);
    let classifier = OnnxCropClassifier::load(
        Path::new(&config.model.path),
        Path::new(&config.model.labels_path),
    )?;
    tracing::info!(crops = classifier.labels().len(), "Classifier loaded");

    // Create application state
    let state = AppState {
        classifier: Arc::new(classifier),
        weather: WeatherClient::with_base_url(config.weather.api_endpoint.clone()),
        config: Arc::new(config.clone()),
    };

    // Start the keep-alive pinger
    if config.keep_alive.enabled {
        tokio::spawn(keepalive::run(
            config.server.port,
            Duration::from_secs(config.keep_alive.interval_secs),
        ));
    }

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
