//! Ranked result records.
//!
//! The boundary with the external result writer: the planner's ordered
//! itinerary list becomes a list of serializable records, each carrying a
//! 1-based rank, the full leg attributes, and a summary block. Monetary
//! and hour values are rounded to 2 decimal places and scores to 4,
//! matching the output contract.

use serde::Serialize;

use crate::domain::{Itinerary, Leg, format_timestamp};

/// One leg of a ranked itinerary, with its full attributes.
#[derive(Debug, Clone, Serialize)]
pub struct LegRecord {
    /// Load-time leg identifier.
    pub flight_id: u32,
    /// Origin airport code.
    pub departure_airport: String,
    /// Destination airport code.
    pub arrival_airport: String,
    /// Departure timestamp in day-month-year hour:minute:second format.
    pub departure_time: String,
    /// Arrival timestamp, same format.
    pub arrival_time: String,
    /// Operating carrier code.
    pub airline_code: String,
    /// Operating carrier display name.
    pub airline_name: String,
    /// Flight number.
    pub flight_number: u32,
    /// Leg price.
    pub price: f64,
    /// Leg duration in hours.
    pub duration: f64,
    /// Leg distance.
    pub distance: f64,
}

impl LegRecord {
    fn from_leg(leg: &Leg) -> Self {
        Self {
            flight_id: leg.id().as_u32(),
            departure_airport: leg.origin().to_string(),
            arrival_airport: leg.destination().to_string(),
            departure_time: format_timestamp(leg.departure()),
            arrival_time: format_timestamp(leg.arrival()),
            airline_code: leg.carrier().to_string(),
            airline_name: leg.carrier_name().to_string(),
            flight_number: leg.flight_number(),
            price: leg.price(),
            duration: round2(leg.duration_hours()),
            distance: leg.distance(),
        }
    }
}

/// Summary block of a ranked itinerary.
#[derive(Debug, Clone, Serialize)]
pub struct ItinerarySummary {
    /// Pre-discount price (sum of leg prices).
    pub original_price: f64,
    /// Discount as a percentage of the pre-discount price.
    pub discount_percentage: f64,
    /// Post-discount price.
    pub discounted_price: f64,
    /// Total in-air time in hours.
    pub flight_time: f64,
    /// Total connection (idle) time in hours.
    pub connection_time: f64,
    /// Total elapsed time in hours.
    pub total_duration: f64,
    /// Total flown distance.
    pub total_distance: f64,
    /// Desirability score.
    pub score: f64,
    /// Human-readable path, e.g. `"NYC -> CHI -> MIA"`.
    pub path: String,
}

/// One ranked itinerary, ready for the result writer.
#[derive(Debug, Clone, Serialize)]
pub struct RankedItinerary {
    /// 1-based rank in the final ordering.
    pub rank: usize,
    /// Stable itinerary identifier assigned by the search.
    pub option_id: u32,
    /// The ordered leg list.
    pub flights: Vec<LegRecord>,
    /// Derived totals and score.
    pub summary: ItinerarySummary,
}

impl RankedItinerary {
    fn new(rank: usize, itinerary: &Itinerary) -> Self {
        Self {
            rank,
            option_id: itinerary.id().as_u32(),
            flights: itinerary.legs().iter().map(LegRecord::from_leg).collect(),
            summary: ItinerarySummary {
                original_price: round2(itinerary.original_price()),
                discount_percentage: round2(itinerary.discount_percentage()),
                discounted_price: round2(itinerary.price()),
                flight_time: round2(itinerary.flight_time()),
                connection_time: round2(itinerary.idle_time()),
                total_duration: round2(itinerary.total_elapsed()),
                total_distance: itinerary.total_distance(),
                score: round4(itinerary.score()),
                path: itinerary.path_string(),
            },
        }
    }
}

/// Turn an ordered (best-first) itinerary list into ranked result records.
pub fn ranked_results(itineraries: &[Itinerary]) -> Vec<RankedItinerary> {
    itineraries
        .iter()
        .enumerate()
        .map(|(i, itinerary)| RankedItinerary::new(i + 1, itinerary))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
