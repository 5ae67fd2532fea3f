// Trait definitions for dependency injection
//
// INFRASTRUCTURE traits only. Pipeline logic lives in domains/flights and
// talks to the outside world through these seams.
//
// Naming convention: Base* for trait names (e.g., BaseFlightSource)

use async_trait::async_trait;
use flight_source_client::{SourceError, SourcePayload};

// =============================================================================
// Flight Source Trait (Infrastructure - one upstream offer feed)
// =============================================================================

#[async_trait]
pub trait BaseFlightSource: Send + Sync {
    /// Fetch one source's payload, retrying per the source's policy.
    /// Only terminal failures are returned as errors.
    async fn fetch_offers(&self, url: &str) -> Result<SourcePayload, SourceError>;
}
