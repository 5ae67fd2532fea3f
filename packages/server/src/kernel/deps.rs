//! Server dependencies (using traits for testability)
//!
//! Everything that reaches outside the process sits behind a trait here so
//! tests can swap in the mocks from `test_dependencies`.

use async_trait::async_trait;
use flight_source_client::{FlightSourceClient, SourceError, SourcePayload};
use std::sync::Arc;

use crate::config::Config;
use crate::kernel::BaseFlightSource;

// =============================================================================
// FlightSourceClient Adapter (implements BaseFlightSource trait)
// =============================================================================

/// Wrapper around FlightSourceClient that implements BaseFlightSource trait
pub struct FlightSourceAdapter(pub Arc<FlightSourceClient>);

impl FlightSourceAdapter {
    pub fn new(client: Arc<FlightSourceClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseFlightSource for FlightSourceAdapter {
    async fn fetch_offers(&self, url: &str) -> Result<SourcePayload, SourceError> {
        self.0.fetch_offers(url).await
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies shared by the catalog and the HTTP layer
#[derive(Clone)]
pub struct ServerDeps {
    pub flight_source: Arc<dyn BaseFlightSource>,
}

impl ServerDeps {
    pub fn new(flight_source: Arc<dyn BaseFlightSource>) -> Self {
        Self { flight_source }
    }

    /// Production wiring: a retrying HTTP client built from the config.
    pub fn from_config(config: &Config) -> Self {
        let client = Arc::new(FlightSourceClient::new(config.retry_policy()));
        Self::new(Arc::new(FlightSourceAdapter::new(client)))
    }
}
