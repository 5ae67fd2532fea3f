//! Kernel module - server infrastructure and dependencies.

pub mod cache;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use cache::{CacheStatus, TtlCache};
pub use deps::{FlightSourceAdapter, ServerDeps};
pub use test_dependencies::MockFlightSource;
pub use traits::BaseFlightSource;
