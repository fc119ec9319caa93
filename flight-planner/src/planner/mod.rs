//! Itinerary planner: search plus the scoring pipeline.
//!
//! This module implements the core algorithm that answers: "given this
//! schedule, how can I get from A to B within a day?" A depth-first
//! search enumerates every itinerary satisfying the constraints, then a
//! deterministic pipeline derives a baseline duration, assigns discounts,
//! ranks by a normalized multi-factor score, and suppresses
//! near-duplicate results.

mod baseline;
mod config;
mod dedup;
mod discount;
mod rank;
mod search;

pub use baseline::baseline_duration;
pub use config::SearchConfig;
pub use dedup::deduplicate;
pub use discount::apply_discounts;
pub use rank::{RankingWeights, rank_itineraries};
pub use search::{Planner, SearchError, SearchRequest};
