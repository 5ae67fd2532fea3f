pub mod pipeline;
pub mod policy;

pub use pipeline::PipelineConfig;
pub use policy::{CollapsePolicy, FanInPolicy};

// Wire types are owned by the source client crate
pub use flight_source_client::{Leg, Offer, OfferIdentity, SourcePayload};
