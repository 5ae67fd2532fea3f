//! Local upstream sources and app wiring for integration tests.
//!
//! Each stub is a real axum server bound to an ephemeral port, so requests go
//! through the production HTTP client and its retry loop.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use flights_core::domains::flights::FlightCatalog;
use flights_core::kernel::ServerDeps;
use flights_core::server::build_app;
use flights_core::Config;
use serde_json::Value;

/// Upstream source that fails a fixed number of times before answering.
#[derive(Clone)]
pub struct StubSource {
    hits: Arc<AtomicUsize>,
    failures_before_success: usize,
    body: Arc<Value>,
}

impl StubSource {
    pub fn new(body: Value) -> Self {
        Self {
            hits: Arc::new(AtomicUsize::new(0)),
            failures_before_success: 0,
            body: Arc::new(body),
        }
    }

    pub fn failing(mut self, failures_before_success: usize) -> Self {
        self.failures_before_success = failures_before_success;
        self
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Serve on 127.0.0.1 and return the source URL.
    pub async fn spawn(&self) -> String {
        let router = Router::new()
            .route("/flights", get(serve_flights))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub source");
        let addr = listener.local_addr().expect("stub source address");

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        format!("http://{}/flights", addr)
    }
}

async fn serve_flights(State(stub): State<StubSource>) -> Response {
    let hit = stub.hits.fetch_add(1, Ordering::SeqCst) + 1;

    if hit <= stub.failures_before_success {
        return (StatusCode::SERVICE_UNAVAILABLE, "source unavailable").into_response();
    }

    Json(stub.body.as_ref().clone()).into_response()
}

/// Configuration pointing at the given sources with test-friendly timings.
pub fn test_config(source_urls: Vec<String>) -> Config {
    Config {
        source_urls,
        request_timeout: Duration::from_secs(2),
        cache_ttl: Duration::from_secs(60),
        ..Config::default()
    }
}

/// Router wired exactly like the binary, plus the catalog for inspection.
pub fn test_app(config: &Config) -> (Router, Arc<FlightCatalog>) {
    let deps = ServerDeps::from_config(config);
    let catalog = Arc::new(FlightCatalog::new(
        deps.flight_source,
        config.pipeline(),
        config.cache_ttl,
    ));

    (build_app(catalog.clone()), catalog)
}
