//! Search configuration for the itinerary planner.

use chrono::Duration;

use super::rank::RankingWeights;

/// Configuration parameters for itinerary search and scoring.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of legs in an itinerary.
    pub max_legs: usize,

    /// How far after the trip start time departures are eligible (hours).
    /// Applied once, up front, over the whole schedule index.
    pub search_window_hours: i64,

    /// Minimum connection gap between consecutive legs (hours, inclusive).
    pub min_connection_hours: f64,

    /// Maximum connection gap between consecutive legs (hours, inclusive).
    pub max_connection_hours: f64,

    /// Maximum total elapsed time (flight + idle) of an itinerary (hours).
    /// Enforced as an early prune during search and again on completion.
    pub max_trip_hours: f64,

    /// Similarity threshold for near-duplicate suppression. Two itineraries
    /// over the same legs collapse when their relative price and duration
    /// differences are both below `1 - threshold`.
    pub similarity_threshold: f64,

    /// Weights of the four ranking factors.
    pub weights: RankingWeights,
}

impl SearchConfig {
    /// Returns the departure eligibility window as a Duration.
    pub fn search_window(&self) -> Duration {
        Duration::hours(self.search_window_hours)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_legs: 4,
            search_window_hours: 24,
            min_connection_hours: 1.0,
            max_connection_hours: 6.0,
            max_trip_hours: 24.0,
            similarity_threshold: 0.9,
            weights: RankingWeights::default(),
        }
    }
}
