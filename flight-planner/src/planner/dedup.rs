//! Near-duplicate itinerary suppression.
//!
//! The ranked list can contain itineraries that are effectively identical
//! to one another. This pass keeps the first occurrence (the best-ranked
//! one) and drops the rest, preserving relative order.

use crate::domain::Itinerary;

/// Filter a score-ordered itinerary list, dropping entries judged similar
/// to one already kept.
///
/// Two itineraries are similar when they contain the exact same set of leg
/// identifiers AND their relative price difference and relative duration
/// difference are both below `1 - threshold`. Each candidate is compared
/// against every already-kept itinerary, not just its predecessor, so the
/// pass is idempotent.
pub fn deduplicate(itineraries: Vec<Itinerary>, threshold: f64) -> Vec<Itinerary> {
    let tolerance = 1.0 - threshold;
    let mut kept: Vec<Itinerary> = Vec::with_capacity(itineraries.len());

    for candidate in itineraries {
        let duplicate = kept.iter().any(|existing| {
            existing.leg_ids() == candidate.leg_ids()
                && relative_difference(existing.price(), candidate.price()) < tolerance
                && relative_difference(existing.total_elapsed(), candidate.total_elapsed())
                    < tolerance
        });
        if !duplicate {
            kept.push(candidate);
        }
    }

    kept
}

/// Relative difference between two non-negative quantities:
/// `|a - b| / max(a, b)`, and 0 when both are 0.
fn relative_difference(a: f64, b: f64) -> f64 {
    let larger = a.max(b);
    if larger == 0.0 {
        0.0
    } else {
        (a - b).abs() / larger
    }
}
