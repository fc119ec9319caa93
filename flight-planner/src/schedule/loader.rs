//! Schedule loading boundary.
//!
//! The schedule loader collaborator hands over a nested
//! origin → destination → trip-record structure (already deserialized from
//! whatever medium it came from). This module validates every record and
//! turns it into domain `Leg`s, assigning each a process-unique identifier.
//! Anything malformed is rejected here; the search engine downstream never
//! re-validates.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{Airport, Carrier, DomainError, Leg, LegId, TimeError, parse_timestamp};

/// One raw trip record as produced by the schedule loader.
///
/// Timestamps are textual, in day-month-year hour:minute:second format.
/// The `duration` field is carried by the feed but the planner derives leg
/// durations from the timestamps instead of trusting it.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRecord {
    /// Departure timestamp, e.g. `"10-07-2024 12:00:00"`.
    #[serde(rename = "departureTime")]
    pub departure_time: String,

    /// Arrival timestamp, same format.
    #[serde(rename = "arrivalTime")]
    pub arrival_time: String,

    /// Operating carrier code, e.g. `"AA"`.
    #[serde(rename = "airlineCode")]
    pub airline_code: String,

    /// Operating carrier display name.
    #[serde(rename = "airlineName")]
    pub airline_name: String,

    /// Flight number.
    #[serde(rename = "flightNumber")]
    pub flight_number: u32,

    /// Ticket price.
    pub price: f64,

    /// Advertised duration in hours (informational; not used).
    #[serde(default)]
    pub duration: f64,

    /// Flown distance.
    pub distance: f64,
}

/// The raw schedule: origin code → destination code → trips in between.
///
/// `BTreeMap` keeps iteration order deterministic, so leg identifiers are
/// stable across loads of the same data.
pub type RawSchedule = BTreeMap<String, BTreeMap<String, Vec<TripRecord>>>;

/// Error rejecting a malformed schedule at load time.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScheduleError {
    /// An origin or destination key is not a valid airport code
    #[error("invalid airport code {code:?}: {source}")]
    InvalidAirport {
        /// The rejected code.
        code: String,
        /// Why it was rejected.
        source: crate::domain::InvalidAirport,
    },

    /// A record's airline code is not a valid carrier code
    #[error("invalid carrier code {code:?}: {source}")]
    InvalidCarrier {
        /// The rejected code.
        code: String,
        /// Why it was rejected.
        source: crate::domain::InvalidCarrier,
    },

    /// A record's timestamp could not be parsed
    #[error("trip {origin} -> {destination}: {source}")]
    InvalidTimestamp {
        /// Origin of the offending record.
        origin: Airport,
        /// Destination of the offending record.
        destination: Airport,
        /// The parse failure.
        source: TimeError,
    },

    /// A record failed leg validation (non-positive duration, negative
    /// price or distance)
    #[error("trip {origin} -> {destination}: {source}")]
    InvalidTrip {
        /// Origin of the offending record.
        origin: Airport,
        /// Destination of the offending record.
        destination: Airport,
        /// The validation failure.
        source: DomainError,
    },
}

/// Validate a raw schedule and build the flat list of legs.
///
/// Leg identifiers are assigned sequentially in iteration order, starting
/// at zero.
///
/// # Errors
///
/// Returns the first `ScheduleError` encountered; a schedule with any
/// malformed record is rejected as a whole.
pub fn build_legs(raw: &RawSchedule) -> Result<Vec<Leg>, ScheduleError> {
    let mut legs = Vec::new();
    let mut next_id = 0u32;

    for (origin_code, destinations) in raw {
        let origin =
            Airport::parse(origin_code).map_err(|source| ScheduleError::InvalidAirport {
                code: origin_code.clone(),
                source,
            })?;

        for (destination_code, trips) in destinations {
            let destination =
                Airport::parse(destination_code).map_err(|source| ScheduleError::InvalidAirport {
                    code: destination_code.clone(),
                    source,
                })?;

            for trip in trips {
                let carrier = Carrier::parse(&trip.airline_code).map_err(|source| {
                    ScheduleError::InvalidCarrier {
                        code: trip.airline_code.clone(),
                        source,
                    }
                })?;
                let departure = parse_timestamp(&trip.departure_time).map_err(|source| {
                    ScheduleError::InvalidTimestamp {
                        origin,
                        destination,
                        source,
                    }
                })?;
                let arrival = parse_timestamp(&trip.arrival_time).map_err(|source| {
                    ScheduleError::InvalidTimestamp {
                        origin,
                        destination,
                        source,
                    }
                })?;

                let leg = Leg::new(
                    LegId::new(next_id),
                    origin,
                    destination,
                    departure,
                    arrival,
                    carrier,
                    trip.airline_name.clone(),
                    trip.flight_number,
                    trip.price,
                    trip.distance,
                )
                .map_err(|source| ScheduleError::InvalidTrip {
                    origin,
                    destination,
                    source,
                })?;

                legs.push(leg);
                next_id += 1;
            }
        }
    }

    Ok(legs)
}
