//! Chorebot webhook server entry point.

use std::sync::Arc;

use chorebot_api::config::Config;
use chorebot_api::error::AppError;
use chorebot_api::state::AppState;
use chorebot_api::{build_router, telemetry};
use chorebot_core::rotation::Rotation;
use chorebot_state_store::file_state_store::FileStateStore;
use chorebot_whapi::WhapiNotifier;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load `.env` before anything reads the environment.
    let dotenv = dotenvy::dotenv();

    let otlp_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok();
    let telemetry = telemetry::init("chorebot", otlp_endpoint.as_deref())?;

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => tracing::debug!("no .env file found"),
        Err(e) => tracing::warn!(error = %e, "failed to load .env file"),
    }

    tracing::info!("Starting chorebot webhook server");

    let config = Config::from_env()?;
    tracing::info!(
        participants = %config.participants,
        target_group_id = %config.target_group_id,
        state_file = %config.state_file.display(),
        "configuration loaded"
    );

    // Build application state.
    let store = Arc::new(FileStateStore::new(&config.state_file));
    let rotation = Arc::new(Rotation::new(config.participants.clone(), store));
    let notifier = WhapiNotifier::new(&config.api_url, config.whapi_token.clone())
        .map_err(|e| AppError::Config(e.to_string()))?;
    let app_state = AppState::new(config.target_group_id.as_str(), rotation, Arc::new(notifier));

    let app = build_router(app_state).layer(TraceLayer::new_for_http());

    // Start server.
    let addr = config.bind_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    telemetry.shutdown();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
