//! Baseline duration estimation.
//!
//! The discount engine compares every itinerary to the best available
//! alternative of comparable simplicity. This module derives that
//! reference duration from the search results.

use crate::domain::Itinerary;

/// Derive the reference duration for discounting.
///
/// If any direct (single-leg) itinerary exists, returns the minimum total
/// elapsed time among the direct ones. Otherwise, returns the minimum
/// total elapsed time among the itineraries with the fewest legs present
/// in the set.
///
/// # Panics
///
/// Panics if `itineraries` is empty. Callers must short-circuit the empty
/// search case first; handing an empty set here is a contract violation,
/// not a recoverable condition.
pub fn baseline_duration(itineraries: &[Itinerary]) -> f64 {
    assert!(
        !itineraries.is_empty(),
        "baseline_duration requires a non-empty itinerary set"
    );

    let min_legs = if itineraries.iter().any(Itinerary::is_direct) {
        1
    } else {
        itineraries
            .iter()
            .map(|itinerary| itinerary.legs().len())
            .min()
            .unwrap_or(1)
    };

    itineraries
        .iter()
        .filter(|itinerary| itinerary.legs().len() == min_legs)
        .map(Itinerary::total_elapsed)
        .fold(f64::INFINITY, f64::min)
}
