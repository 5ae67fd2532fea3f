//! Flights domain - aggregated, deduplicated flight offers from upstream sources

pub mod activities;
pub mod error;
pub mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use activities::{CatalogSnapshot, FlightCatalog, SourceFailure};
pub use error::FlightsError;
pub use models::{CollapsePolicy, FanInPolicy, Offer, PipelineConfig};
