//! Attrition Decision Engine - HTTP entry point
//!
//! Loads the service configuration and classifier once, then serves the
//! prediction API.

use std::env;

use attrition_engine::api::{AppState, create_router};
use attrition_engine::config::ConfigLoader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/attrition";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir =
        env::var("ATTRITION_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let mut loader = ConfigLoader::load(&config_dir)?;
    if let Ok(bind) = env::var("ATTRITION_BIND") {
        loader = loader.with_bind_address(bind);
    }

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&loader.config().logging.level))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(config_dir = %config_dir, "Configuration loaded");

    // Only a contract mismatch stops startup; a missing model degrades each cycle
    let classifier = loader.load_serving_classifier()?;
    match classifier.unavailable_reason() {
        None => info!(model = %classifier.name(), "Classifier loaded"),
        Some(reason) => warn!(error = %reason, "Starting without a classifier"),
    }

    let state = AppState::from_shared(classifier, loader.display());
    let app = create_router(state);

    let bind_address = &loader.config().server.bind_address;
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!(address = %bind_address, "Attrition decision engine listening");
    axum::serve(listener, app).await?;
    Ok(())
}
