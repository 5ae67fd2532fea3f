//! Offer builders for unit tests.

use flight_source_client::{Leg, Offer};
use rust_decimal::Decimal;

pub fn leg(flight_number: &str, departure: &str) -> Leg {
    Leg {
        origin_name: "Schonefeld".to_string(),
        destination_name: "Stansted".to_string(),
        departure_date_time_utc: departure.to_string(),
        arrival_date_time_utc: departure.to_string(),
        flight_number: flight_number.to_string(),
        duration: 120,
    }
}

pub fn offer(
    outbound_flight: &str,
    outbound_departure: &str,
    return_flight: &str,
    return_departure: &str,
    price: i64,
) -> Offer {
    Offer::new(
        vec![
            leg(outbound_flight, outbound_departure),
            leg(return_flight, return_departure),
        ],
        Decimal::from(price),
    )
}
