use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One physical flight segment.
///
/// Timestamps are kept exactly as the source sent them; identity comparison
/// depends on the raw strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub origin_name: String,
    pub destination_name: String,
    pub departure_date_time_utc: String,
    pub arrival_date_time_utc: String,
    pub flight_number: String,
    /// Minutes
    pub duration: u32,
}

/// A two-leg itinerary with a price.
///
/// `slices` stays a `Vec` on the wire so that an offer with the wrong number
/// of legs decodes and can be rejected by identity assignment instead of
/// failing the whole payload. A missing or `null` list decodes as empty.
/// An `id` sent by a source is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub id: Option<OfferIdentity>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub slices: Vec<Leg>,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Offer {
    pub fn new(slices: Vec<Leg>, price: Decimal) -> Self {
        Self {
            id: None,
            slices,
            price,
        }
    }

    /// Outbound and return legs, if the offer has exactly two slices.
    pub fn legs(&self) -> Option<(&Leg, &Leg)> {
        match self.slices.as_slice() {
            [outbound, inbound] => Some((outbound, inbound)),
            _ => None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Leg>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Leg>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LegKey {
    flight_number: String,
    departure: String,
}

impl LegKey {
    fn of(leg: &Leg) -> Self {
        Self {
            flight_number: leg.flight_number.clone(),
            departure: leg.departure_date_time_utc.clone(),
        }
    }
}

/// Canonical itinerary identity: both legs' flight number and departure time.
///
/// Equality and hashing use the structured fields, so distinct quadruples never
/// collide even when a component contains the `-` used by the rendered form.
/// Serializes as `{flight}-{departure}-{flight}-{departure}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OfferIdentity {
    outbound: LegKey,
    inbound: LegKey,
}

impl OfferIdentity {
    pub fn new(outbound: &Leg, inbound: &Leg) -> Self {
        Self {
            outbound: LegKey::of(outbound),
            inbound: LegKey::of(inbound),
        }
    }
}

impl fmt::Display for OfferIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.outbound.flight_number,
            self.outbound.departure,
            self.inbound.flight_number,
            self.inbound.departure
        )
    }
}

impl Serialize for OfferIdentity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Body returned by a flight source.
///
/// A missing or `null` `flights` field is an empty contribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourcePayload {
    #[serde(default)]
    pub flights: Option<Vec<Offer>>,
}

impl SourcePayload {
    pub fn from_offers(offers: Vec<Offer>) -> Self {
        Self {
            flights: Some(offers),
        }
    }

    pub fn offer_count(&self) -> usize {
        self.flights.as_ref().map_or(0, Vec::len)
    }

    pub fn into_offers(self) -> Vec<Offer> {
        self.flights.unwrap_or_default()
    }
}
