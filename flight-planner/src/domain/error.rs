//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from schedule-loading and search errors.

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g., arrival not after departure)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Itinerary has no legs
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// Consecutive legs don't connect geographically
    #[error("legs do not connect: arrived at {arrived_at} but next leg departs from {departs_from}")]
    DisconnectedLegs {
        /// Where the previous leg arrived
        arrived_at: crate::domain::Airport,
        /// Where the next leg departs
        departs_from: crate::domain::Airport,
    },
}
