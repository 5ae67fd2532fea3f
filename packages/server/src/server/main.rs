// Main entry point for the flight aggregator API server

use std::sync::Arc;

use anyhow::{Context, Result};
use flights_core::domains::flights::FlightCatalog;
use flights_core::kernel::ServerDeps;
use flights_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,flights_core=debug,flight_source_client=debug,tower_http=info".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Flight Aggregator API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        sources = config.source_urls.len(),
        request_timeout_ms = config.request_timeout.as_millis() as u64,
        max_retries = config.max_retries,
        cache_ttl_ms = config.cache_ttl.as_millis() as u64,
        fan_in = %config.fan_in,
        collapse = %config.collapse,
        "Configuration loaded"
    );

    // Build application
    let deps = ServerDeps::from_config(&config);
    let catalog = Arc::new(FlightCatalog::new(
        deps.flight_source.clone(),
        config.pipeline(),
        config.cache_ttl,
    ));
    let app = build_app(catalog);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Flights: http://localhost:{}/flights", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
