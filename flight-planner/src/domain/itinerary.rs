//! Itinerary type.
//!
//! An `Itinerary` is an ordered sequence of legs forming one candidate trip
//! from origin to destination. Its totals are derived deterministically from
//! the leg sequence when it is assembled; the leg sequence never changes
//! afterwards. Only the discount and the desirability score are assigned by
//! the later pipeline stages.

use std::collections::BTreeSet;
use std::fmt;

use super::{DomainError, Leg, LegId, hours_between};

/// Stable identifier for an itinerary, assigned when the search records it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItineraryId(u32);

impl ItineraryId {
    /// Create an itinerary identifier from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value of this identifier.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered sequence of legs connecting an origin to a destination.
///
/// # Invariants
///
/// - At least one leg
/// - Consecutive legs connect (destination of one = origin of the next)
/// - The leg sequence is fixed at assembly; only `discount` and `score`
///   are mutated by the discount and ranking stages
#[derive(Debug, Clone)]
pub struct Itinerary {
    id: ItineraryId,
    legs: Vec<Leg>,
    // Derived at assembly from the leg sequence
    flight_time: f64,
    idle_time: f64,
    original_price: f64,
    total_distance: f64,
    // Assigned by later pipeline stages
    price: f64,
    discount: f64,
    score: f64,
}

impl Itinerary {
    /// Assemble an itinerary from a completed leg sequence, deriving its
    /// totals.
    ///
    /// Flight time is the sum of leg durations. Idle time is the sum of the
    /// gaps between each arrival and the next departure, with each gap
    /// clamped to be non-negative. Total elapsed time is their sum.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `legs` is empty or if consecutive legs do not
    /// connect geographically.
    pub fn assemble(id: ItineraryId, legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        for pair in legs.windows(2) {
            if pair[0].destination() != pair[1].origin() {
                return Err(DomainError::DisconnectedLegs {
                    arrived_at: pair[0].destination(),
                    departs_from: pair[1].origin(),
                });
            }
        }

        let flight_time = legs.iter().map(Leg::duration_hours).sum();
        let idle_time = legs
            .windows(2)
            .map(|pair| hours_between(pair[0].arrival(), pair[1].departure()).max(0.0))
            .sum();
        let original_price = legs.iter().map(Leg::price).sum();
        let total_distance = legs.iter().map(Leg::distance).sum();

        Ok(Itinerary {
            id,
            legs,
            flight_time,
            idle_time,
            original_price,
            total_distance,
            price: original_price,
            discount: 0.0,
            score: 0.0,
        })
    }

    /// Returns the identifier assigned when this itinerary was recorded.
    pub fn id(&self) -> ItineraryId {
        self.id
    }

    /// Returns the leg sequence.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of connections (legs minus one).
    pub fn connections(&self) -> usize {
        self.legs.len() - 1
    }

    /// Returns true if this is a direct (single-leg) trip.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    /// Returns the set of leg identifiers, for near-duplicate comparison.
    pub fn leg_ids(&self) -> BTreeSet<LegId> {
        self.legs.iter().map(Leg::id).collect()
    }

    /// Returns the total in-air time in hours.
    pub fn flight_time(&self) -> f64 {
        self.flight_time
    }

    /// Returns the total connection (idle) time in hours.
    pub fn idle_time(&self) -> f64 {
        self.idle_time
    }

    /// Returns the total elapsed time in hours (flight time + idle time).
    pub fn total_elapsed(&self) -> f64 {
        self.flight_time + self.idle_time
    }

    /// Returns the pre-discount price (sum of leg prices).
    pub fn original_price(&self) -> f64 {
        self.original_price
    }

    /// Returns the current price: original price minus any applied discount.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the applied discount amount (0 until assigned).
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Returns the discount as a percentage of the pre-discount price.
    pub fn discount_percentage(&self) -> f64 {
        if self.original_price > 0.0 {
            self.discount / self.original_price * 100.0
        } else {
            0.0
        }
    }

    /// Returns the total flown distance.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Returns the desirability score (0 until assigned).
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Apply a discount amount, reducing the price used by downstream
    /// stages. Replaces any previously applied discount.
    pub fn apply_discount(&mut self, amount: f64) {
        self.discount = amount;
        self.price = self.original_price - amount;
    }

    /// Assign the desirability score computed by the ranking stage.
    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    /// Returns the human-readable path: each leg's origin joined with
    /// `" -> "`, with the final destination appended.
    ///
    /// # Examples
    ///
    /// A NYC → CHI → MIA trip renders as `"NYC -> CHI -> MIA"`.
    pub fn path_string(&self) -> String {
        let mut path = String::new();
        for leg in &self.legs {
            path.push_str(leg.origin().as_str());
            path.push_str(" -> ");
        }
        // Non-empty by invariant
        path.push_str(self.legs[self.legs.len() - 1].destination().as_str());
        path
    }
}
