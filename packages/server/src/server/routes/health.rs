use axum::{extract::Extension, Json};
use serde::Serialize;

use crate::domains::flights::{CollapsePolicy, FanInPolicy, SourceFailure};
use crate::kernel::CacheStatus;
use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    sources: usize,
    fan_in: FanInPolicy,
    collapse: CollapsePolicy,
    cache_ttl_ms: u64,
    cache: CacheStatus,
    /// Sources left out of the cached catalog under best-effort fan-in
    failed_sources: Vec<SourceFailure>,
}

/// Health check endpoint
///
/// Never contacts the upstream sources; reports configuration and cache state.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let config = state.catalog.config();

    Json(HealthResponse {
        status: "ok".to_string(),
        sources: config.source_urls.len(),
        fan_in: config.fan_in,
        collapse: config.collapse,
        cache_ttl_ms: state.catalog.cache_ttl().as_millis() as u64,
        cache: state.catalog.cache_status(),
        failed_sources: state.catalog.failed_sources(),
    })
}
