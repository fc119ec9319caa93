//! Itinerary ranking.
//!
//! Assigns every itinerary a desirability score in [0, 1] from four
//! factors computed across the whole set, then produces a total order:
//! highest score first, ties broken by lower price.

use std::cmp::Ordering;

use crate::domain::{Carrier, Itinerary};

/// Weights of the four ranking factors. They should sum to 1 so the final
/// score stays within the unit interval.
#[derive(Debug, Clone, Copy)]
pub struct RankingWeights {
    /// Weight of the price factor (lower price is better).
    pub price: f64,
    /// Weight of the speed factor (lower elapsed time is better).
    pub speed: f64,
    /// Weight of the directness factor (fewer connections is better).
    pub directness: f64,
    /// Weight of the carrier-preference factor (more matching legs is better).
    pub preference: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            price: 0.35,
            speed: 0.30,
            directness: 0.20,
            preference: 0.15,
        }
    }
}

/// Score every itinerary and sort the set best-first.
///
/// Each factor is standardized to zero mean and unit variance across the
/// set, with its sign oriented so that "better" is numerically larger,
/// then rescaled to [0, 1] by min-max over the set. A factor with zero
/// variance does not discriminate and maps uniformly to 0.5. The final
/// score is the weighted sum of the four rescaled factors.
///
/// Sorting is descending by score, with ties broken ascending by
/// post-discount price.
pub fn rank_itineraries(
    itineraries: &mut [Itinerary],
    preferred_carrier: Carrier,
    weights: &RankingWeights,
) {
    if itineraries.is_empty() {
        return;
    }

    let price = unit_scores(
        &itineraries.iter().map(Itinerary::price).collect::<Vec<_>>(),
        true,
    );
    let speed = unit_scores(
        &itineraries
            .iter()
            .map(Itinerary::total_elapsed)
            .collect::<Vec<_>>(),
        true,
    );
    let directness = unit_scores(
        &itineraries
            .iter()
            .map(|itinerary| itinerary.connections() as f64)
            .collect::<Vec<_>>(),
        true,
    );
    let preference = unit_scores(
        &itineraries
            .iter()
            .map(|itinerary| preferred_fraction(itinerary, preferred_carrier))
            .collect::<Vec<_>>(),
        false,
    );

    for (i, itinerary) in itineraries.iter_mut().enumerate() {
        let score = weights.price * price[i]
            + weights.speed * speed[i]
            + weights.directness * directness[i]
            + weights.preference * preference[i];
        itinerary.set_score(score);
    }

    itineraries.sort_by(|a, b| {
        b.score()
            .partial_cmp(&a.score())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.price().partial_cmp(&b.price()).unwrap_or(Ordering::Equal))
    });
}

/// Fraction of an itinerary's legs operated by the preferred carrier.
fn preferred_fraction(itinerary: &Itinerary, preferred: Carrier) -> f64 {
    let matching = itinerary
        .legs()
        .iter()
        .filter(|leg| leg.carrier() == preferred)
        .count();
    matching as f64 / itinerary.legs().len() as f64
}

/// Standardize raw factor values, orient them so better is larger, and
/// rescale to the unit interval.
///
/// A zero-variance factor (every itinerary identical) cannot discriminate
/// and maps uniformly to 0.5 rather than dividing by zero.
fn unit_scores(values: &[f64], lower_is_better: bool) -> Vec<f64> {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        return vec![0.5; values.len()];
    }

    let oriented: Vec<f64> = values
        .iter()
        .map(|v| {
            let z = (v - mean) / std_dev;
            if lower_is_better { -z } else { z }
        })
        .collect();

    let min = oriented.iter().fold(f64::INFINITY, |acc, &v| acc.min(v));
    let max = oriented.iter().fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    if max == min {
        return vec![0.5; values.len()];
    }

    oriented.iter().map(|z| (z - min) / (max - min)).collect()
}
