use flight_source_client::{Offer, SourcePayload};

/// Concatenate per-source offers in source order, keeping each source's own
/// order. A payload without a `flights` list contributes nothing.
pub fn merge(payloads: Vec<SourcePayload>) -> Vec<Offer> {
    payloads
        .into_iter()
        .flat_map(SourcePayload::into_offers)
        .collect()
}
