use flight_source_client::{Offer, OfferIdentity};

use crate::domains::flights::error::{FlightsError, Result};

/// Identity of an offer, or `None` unless it has exactly two slices.
pub fn derive_identity(offer: &Offer) -> Option<OfferIdentity> {
    offer
        .legs()
        .map(|(outbound, inbound)| OfferIdentity::new(outbound, inbound))
}

/// Attach an identity to every offer, in place and in order.
///
/// Rejects the whole batch on the first offer that is not a two-leg itinerary.
pub fn assign_identities(mut offers: Vec<Offer>) -> Result<Vec<Offer>> {
    for (index, offer) in offers.iter_mut().enumerate() {
        let identity = derive_identity(offer).ok_or_else(|| FlightsError::MalformedOffer {
            index,
            slices: offer.slices.len(),
        })?;
        offer.id = Some(identity);
    }

    Ok(offers)
}
