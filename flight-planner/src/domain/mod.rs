//! Domain types for the flight itinerary planner.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod airport;
mod carrier;
mod error;
mod itinerary;
mod leg;
mod time;

pub use airport::{Airport, InvalidAirport};
pub use carrier::{Carrier, InvalidCarrier};
pub use error::DomainError;
pub use itinerary::{Itinerary, ItineraryId};
pub use leg::{Leg, LegId};
pub use time::{TIMESTAMP_FORMAT, TimeError, format_timestamp, hours_between, parse_timestamp};
