//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::net::TcpListener;

use api_server::config::AppConfig;
use api_server::state::AppState;
use api_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_telemetry(&TelemetryConfig::from_env());

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(config.database.as_ref()).await;

    // Start HTTP server
    let listener = TcpListener::bind((config.host.as_str(), config.port))?;
    api_server::run(listener, state)?.await
}
