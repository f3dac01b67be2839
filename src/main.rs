use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use vitwise::api::{self, app_state::AppState};
use vitwise::config::loader::ConfigLoader;
use vitwise::observability::{
    AppMetrics, HealthCheckResult, ObservabilityState, create_observability_router, init_tracing,
};
use vitwise::reference::ReferenceData;
use vitwise::services::{create_recognition_service, create_timetable_service};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    let _log_guard = init_tracing(&config.logging);

    info!("Starting Vitwise ({})...", config.environment);
    ConfigLoader::validate(&config).context("invalid configuration")?;
    info!("Configuration loaded successfully");

    let reference = Arc::new(
        ReferenceData::load(&config.reference).context("failed to load reference data")?,
    );
    info!("Reference data loaded");

    let recognizer = Arc::from(create_recognition_service(&config.recognition)?);
    info!(
        "Recognition service initialized (configured: {})",
        config.recognition.has_api_key()
    );

    let metrics = Arc::new(AppMetrics::default());
    let timetable_service =
        create_timetable_service(reference.clone(), recognizer, metrics.clone());
    info!("Timetable service initialized");

    let app_state = AppState::new(
        timetable_service,
        metrics.clone(),
        config.server.max_upload_size,
    );
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::with_metrics(
        env!("CARGO_PKG_VERSION").to_string(),
        metrics,
    ));
    observability_state
        .add_health_check(HealthCheckResult::healthy(
            "reference_data",
            format!(
                "{} slots, {} course names",
                reference.slots.len(),
                reference.names.len()
            ),
        ))
        .await;

    let router =
        create_observability_router(observability_state).merge(api::create_router(app_state));
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
