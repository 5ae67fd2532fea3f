//! Flights domain activities - the offer pipeline stages
//!
//! Each stage is a plain function so it can be tested on its own;
//! `catalog` wires them together behind the cache.

pub mod aggregate;
pub mod catalog;
pub mod dedupe;
pub mod identity;
pub mod merge;

pub use aggregate::{aggregate, Aggregation, SourceFailure};
pub use catalog::{build_catalog, CatalogSnapshot, FlightCatalog};
pub use dedupe::dedupe;
pub use identity::{assign_identities, derive_identity};
pub use merge::merge;
