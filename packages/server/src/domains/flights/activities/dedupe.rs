use std::collections::HashSet;

use flight_source_client::{Offer, OfferIdentity};

use crate::domains::flights::models::CollapsePolicy;

/// Collapse offers that share an identity down to one representative.
///
/// `KeepFirst` keeps the earliest offer of each identity at its position;
/// `KeepLast` keeps the latest one at its position. Survivors keep their
/// relative order. Offers without an identity are never collapsed.
pub fn dedupe(offers: Vec<Offer>, policy: CollapsePolicy) -> Vec<Offer> {
    let mut seen: HashSet<OfferIdentity> = HashSet::with_capacity(offers.len());

    match policy {
        CollapsePolicy::KeepFirst => offers
            .into_iter()
            .filter(|offer| first_sighting(&mut seen, offer))
            .collect(),
        CollapsePolicy::KeepLast => {
            let mut survivors: Vec<Offer> = offers
                .into_iter()
                .rev()
                .filter(|offer| first_sighting(&mut seen, offer))
                .collect();
            survivors.reverse();
            survivors
        }
    }
}

fn first_sighting(seen: &mut HashSet<OfferIdentity>, offer: &Offer) -> bool {
    match &offer.id {
        Some(identity) => seen.insert(identity.clone()),
        None => true,
    }
}
