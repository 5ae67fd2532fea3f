//! Test fixtures for upstream payloads.
//!
//! Two sources with four offers each. One itinerary appears in both with a
//! different price, so a full aggregation yields seven unique offers.

use flight_source_client::SourcePayload;
use serde_json::{json, Value};

pub const OVERLAP_ID: &str = "144-2019-08-08T04:30:00.000Z-8542-2019-08-10T05:35:00.000Z";
pub const SOURCE1_OVERLAP_PRICE: f64 = 129.0;
pub const SOURCE2_OVERLAP_PRICE: f64 = 119.0;

/// A two-leg offer as a source would send it
pub fn offer_json(
    out_flight: &str,
    out_departure: &str,
    back_flight: &str,
    back_departure: &str,
    price: f64,
) -> Value {
    json!({
        "slices": [
            {
                "origin_name": "Schonefeld",
                "destination_name": "Stansted",
                "departure_date_time_utc": out_departure,
                "arrival_date_time_utc": "2019-08-08T06:25:00.000Z",
                "flight_number": out_flight,
                "duration": 115
            },
            {
                "origin_name": "Stansted",
                "destination_name": "Schonefeld",
                "departure_date_time_utc": back_departure,
                "arrival_date_time_utc": "2019-08-10T07:35:00.000Z",
                "flight_number": back_flight,
                "duration": 120
            }
        ],
        "price": price
    })
}

pub fn source1_json() -> Value {
    json!({
        "flights": [
            offer_json("144", "2019-08-08T04:30:00.000Z", "8542", "2019-08-10T05:35:00.000Z", SOURCE1_OVERLAP_PRICE),
            offer_json("8545", "2019-08-08T20:25:00.000Z", "1545", "2019-08-10T06:50:00.000Z", 134.81),
            offer_json("146", "2019-08-08T16:00:00.000Z", "8544", "2019-08-10T18:00:00.000Z", 152.75),
            offer_json("8543", "2019-08-08T10:10:00.000Z", "147", "2019-08-10T12:00:00.000Z", 98.5),
        ]
    })
}

pub fn source2_json() -> Value {
    json!({
        "flights": [
            offer_json("1544", "2019-08-08T09:15:00.000Z", "1545", "2019-08-10T06:50:00.000Z", 201.0),
            offer_json("144", "2019-08-08T04:30:00.000Z", "8542", "2019-08-10T05:35:00.000Z", SOURCE2_OVERLAP_PRICE),
            offer_json("148", "2019-08-08T19:30:00.000Z", "149", "2019-08-10T21:40:00.000Z", 77.0),
            offer_json("8546", "2019-08-08T13:05:00.000Z", "8547", "2019-08-10T15:20:00.000Z", 110.0),
        ]
    })
}

pub fn payload(value: Value) -> SourcePayload {
    serde_json::from_value(value).expect("fixture payload must decode")
}
