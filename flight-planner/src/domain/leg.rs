//! Flight leg type.
//!
//! A `Leg` is one scheduled point-to-point flight. Legs are created once
//! when the schedule is loaded and are immutable afterwards; everything the
//! search engine consumes is validated here, at construction.

use std::fmt;

use chrono::NaiveDateTime;

use super::{Airport, Carrier, DomainError, hours_between};

/// Process-unique identifier for a leg, assigned at schedule load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LegId(u32);

impl LegId {
    /// Create a leg identifier from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value of this identifier.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single scheduled point-to-point flight.
///
/// # Invariants
///
/// - `arrival > departure`, so the derived duration is always positive
/// - `price >= 0` and `distance >= 0`
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{Airport, Carrier, Leg, LegId, parse_timestamp};
///
/// let leg = Leg::new(
///     LegId::new(1),
///     Airport::parse("NYC").unwrap(),
///     Airport::parse("MIA").unwrap(),
///     parse_timestamp("10-07-2024 12:00:00").unwrap(),
///     parse_timestamp("10-07-2024 15:00:00").unwrap(),
///     Carrier::parse("AA").unwrap(),
///     "American Airlines".into(),
///     1042,
///     200.0,
///     1090.0,
/// )
/// .unwrap();
///
/// assert_eq!(leg.duration_hours(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    id: LegId,
    origin: Airport,
    destination: Airport,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    carrier: Carrier,
    carrier_name: String,
    flight_number: u32,
    price: f64,
    distance: f64,
    // Cached at construction: hours from departure to arrival, always > 0
    duration_hours: f64,
}

impl Leg {
    /// Construct a leg, validating its invariants.
    ///
    /// The flight duration is derived from the departure and arrival
    /// timestamps, never taken on trust from the feed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `arrival` is not strictly after `departure`
    /// - `price` or `distance` is negative or not finite
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: LegId,
        origin: Airport,
        destination: Airport,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        carrier: Carrier,
        carrier_name: String,
        flight_number: u32,
        price: f64,
        distance: f64,
    ) -> Result<Self, DomainError> {
        let duration_hours = hours_between(departure, arrival);
        if duration_hours <= 0.0 {
            return Err(DomainError::InvalidLeg(
                "arrival must be strictly after departure",
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidLeg("price must be non-negative"));
        }
        if !distance.is_finite() || distance < 0.0 {
            return Err(DomainError::InvalidLeg("distance must be non-negative"));
        }

        Ok(Leg {
            id,
            origin,
            destination,
            departure,
            arrival,
            carrier,
            carrier_name,
            flight_number,
            price,
            distance,
            duration_hours,
        })
    }

    /// Returns the load-time identifier of this leg.
    pub fn id(&self) -> LegId {
        self.id
    }

    /// Returns the origin airport.
    pub fn origin(&self) -> Airport {
        self.origin
    }

    /// Returns the destination airport.
    pub fn destination(&self) -> Airport {
        self.destination
    }

    /// Returns the departure timestamp.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Returns the arrival timestamp.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns the operating carrier code.
    pub fn carrier(&self) -> Carrier {
        self.carrier
    }

    /// Returns the operating carrier's display name.
    pub fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    /// Returns the flight number.
    pub fn flight_number(&self) -> u32 {
        self.flight_number
    }

    /// Returns the ticket price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the flown distance.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the flight duration in hours (guaranteed positive).
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }
}
