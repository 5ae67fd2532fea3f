// Flight Offer Aggregator - API Core
//
// Fetches flight offers from several unreliable upstream sources, merges them,
// assigns each itinerary a deterministic identity and collapses duplicates.
// The result is served from a short-lived cache behind a single HTTP endpoint.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
