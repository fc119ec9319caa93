//! Multi-leg flight itinerary planner.
//!
//! Answers: "given a day's flight schedule, how can I get from A to B,
//! and which options are worth taking?" A depth-bounded search enumerates
//! every itinerary within the constraints, then discounts, ranks, and
//! deduplicates the results.

pub mod domain;
pub mod planner;
pub mod results;
pub mod schedule;
