//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, http::Method, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::flights::FlightCatalog;
use crate::server::routes::{flights_handler, health_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<FlightCatalog>,
}

/// Build the Axum application router
///
/// The catalog owns the source client and the response cache, so one catalog
/// must back every request for caching to take effect.
pub fn build_app(catalog: Arc<FlightCatalog>) -> Router {
    let app_state = AppState { catalog };

    // Read-only API, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/flights", get(flights_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
