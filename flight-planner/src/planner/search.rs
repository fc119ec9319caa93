//! Depth-first itinerary search.
//!
//! Enumerates every itinerary from origin to destination that satisfies
//! the search constraints: departures inside the eligibility window, leg
//! count bound, connection gap bounds, no revisited airports, and the
//! total elapsed time cap. Enumeration is exhaustive within those rules;
//! there is no heuristic pruning.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::{Airport, Carrier, Itinerary, ItineraryId, Leg, hours_between};
use crate::schedule::ScheduleIndex;

use super::baseline::baseline_duration;
use super::config::SearchConfig;
use super::dedup::deduplicate;
use super::discount::apply_discounts;
use super::rank::rank_itineraries;

/// Error from itinerary search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// No itinerary satisfies the search constraints.
    ///
    /// Distinct from "found itineraries but all were suppressed by
    /// deduplication": this error means the search itself came up empty,
    /// and callers must short-circuit before the baseline estimator.
    #[error("no itinerary found from {origin} to {destination}")]
    NoItineraries {
        /// Requested origin.
        origin: Airport,
        /// Requested destination.
        destination: Airport,
    },
}

/// Request for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Trip origin airport.
    pub origin: Airport,

    /// Trip destination airport.
    pub destination: Airport,

    /// Earliest acceptable departure; also anchors the eligibility window.
    pub departure: NaiveDateTime,

    /// Carrier the traveler prefers, used by the ranking stage.
    pub preferred_carrier: Carrier,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(
        origin: Airport,
        destination: Airport,
        departure: NaiveDateTime,
        preferred_carrier: Carrier,
    ) -> Self {
        Self {
            origin,
            destination,
            departure,
            preferred_carrier,
        }
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin == self.destination {
            return Err(SearchError::InvalidRequest(
                "origin and destination must differ".to_string(),
            ));
        }
        Ok(())
    }
}

/// Itinerary planner: exhaustive search plus the scoring pipeline.
pub struct Planner<'a> {
    index: &'a ScheduleIndex,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner over a schedule index.
    pub fn new(index: &'a ScheduleIndex, config: &'a SearchConfig) -> Self {
        Self { index, config }
    }

    /// Enumerate every itinerary satisfying the search constraints.
    ///
    /// Results are in discovery order (depth-first, with each airport's
    /// departures visited chronologically); the order carries no meaning
    /// and is superseded by [`Planner::plan`]'s ranking.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if origin equals destination
    /// - `NoItineraries` if nothing satisfies the constraints
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Itinerary>, SearchError> {
        request.validate()?;

        // Eligibility filter, applied once over the whole index: only legs
        // departing within the search window are considered at all.
        let window_end = request.departure + self.config.search_window();
        let windowed: HashMap<Airport, &[Leg]> = self
            .index
            .origins()
            .map(|origin| {
                (
                    origin,
                    self.index
                        .departures_between(origin, request.departure, window_end),
                )
            })
            .collect();

        let mut found = Vec::new();
        let mut visited = HashSet::new();
        visited.insert(request.origin);

        self.explore(
            &windowed,
            request.destination,
            request.origin,
            request.departure,
            Vec::new(),
            0.0,
            &visited,
            &mut found,
        );

        if found.is_empty() {
            return Err(SearchError::NoItineraries {
                origin: request.origin,
                destination: request.destination,
            });
        }

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            found = found.len(),
            "itinerary search complete"
        );

        Ok(found)
    }

    /// Run the full pipeline: search, baseline, discounts, ranking, and
    /// near-duplicate suppression. Returns itineraries best-first.
    ///
    /// # Errors
    ///
    /// Same as [`Planner::search`]; the empty-search case short-circuits
    /// before the baseline estimator runs.
    pub fn plan(&self, request: &SearchRequest) -> Result<Vec<Itinerary>, SearchError> {
        let mut itineraries = self.search(request)?;

        let baseline = baseline_duration(&itineraries);
        debug!(baseline_hours = baseline, "derived baseline duration");

        apply_discounts(&mut itineraries, baseline);
        rank_itineraries(
            &mut itineraries,
            request.preferred_carrier,
            &self.config.weights,
        );

        let before = itineraries.len();
        let itineraries = deduplicate(itineraries, self.config.similarity_threshold);
        debug!(
            kept = itineraries.len(),
            suppressed = before - itineraries.len(),
            "near-duplicate suppression complete"
        );

        Ok(itineraries)
    }

    /// Depth-first step. Each recursive branch owns its copies of the leg
    /// prefix and visited set; nothing is shared across sibling branches.
    #[allow(clippy::too_many_arguments)]
    fn explore(
        &self,
        windowed: &HashMap<Airport, &[Leg]>,
        destination: Airport,
        location: Airport,
        current_time: NaiveDateTime,
        prefix: Vec<Leg>,
        elapsed: f64,
        visited: &HashSet<Airport>,
        found: &mut Vec<Itinerary>,
    ) {
        if location == destination {
            // Zero-leg itineraries are never recorded; the request
            // validation rules out origin == destination, so the prefix is
            // non-empty here.
            let id = ItineraryId::new(found.len() as u32 + 1);
            if let Ok(itinerary) = Itinerary::assemble(id, prefix) {
                // Final acceptance check on the recomputed totals
                if itinerary.total_elapsed() <= self.config.max_trip_hours {
                    found.push(itinerary);
                }
            }
            return;
        }

        if prefix.len() >= self.config.max_legs {
            return;
        }

        for leg in windowed.get(&location).copied().unwrap_or(&[]) {
            // Time contributed by taking this leg: its duration, plus the
            // connection gap for the second leg onward.
            let added = if prefix.is_empty() {
                if leg.departure() < current_time {
                    continue;
                }
                leg.duration_hours()
            } else {
                let gap = hours_between(current_time, leg.departure());
                if gap < self.config.min_connection_hours || gap > self.config.max_connection_hours
                {
                    continue;
                }
                gap + leg.duration_hours()
            };

            if visited.contains(&leg.destination()) {
                continue;
            }

            // Early prune: abandon the branch as soon as the running total
            // exceeds the trip cap.
            if elapsed + added > self.config.max_trip_hours {
                continue;
            }

            let mut next_prefix = prefix.clone();
            next_prefix.push(leg.clone());
            let mut next_visited = visited.clone();
            next_visited.insert(leg.destination());

            self.explore(
                windowed,
                destination,
                leg.destination(),
                leg.arrival(),
                next_prefix,
                elapsed + added,
                &next_visited,
                found,
            );
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{LegId, parse_timestamp};
    use chrono::Duration;
    use proptest::prelude::*;

    const AIRPORTS: [&str; 6] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"];
    const CARRIERS: [&str; 3] = ["AA", "DL", "UA"];

    fn start_time() -> NaiveDateTime {
        parse_timestamp("10-07-2024 00:00:00").unwrap()
    }

    /// One random leg: (origin index, destination offset, departure offset
    /// in minutes, duration in minutes, price, carrier index).
    type RawLeg = (usize, usize, i64, i64, f64, usize);

    fn legs_strategy() -> impl Strategy<Value = Vec<RawLeg>> {
        prop::collection::vec(
            (
                0usize..AIRPORTS.len(),
                1usize..AIRPORTS.len(),
                0i64..(36 * 60),
                20i64..(12 * 60),
                (10u32..2000).prop_map(|p| p as f64 / 4.0),
                0usize..CARRIERS.len(),
            ),
            0..40,
        )
    }

    fn build_index(raw: &[RawLeg]) -> ScheduleIndex {
        let legs: Vec<Leg> = raw
            .iter()
            .enumerate()
            .map(|(i, &(origin, dest_offset, dep_mins, dur_mins, price, carrier_idx))| {
                // Offset arithmetic keeps origin != destination
                let destination = (origin + dest_offset) % AIRPORTS.len();
                let departure = start_time() + Duration::minutes(dep_mins);
                let arrival = departure + Duration::minutes(dur_mins);
                Leg::new(
                    LegId::new(i as u32),
                    Airport::parse(AIRPORTS[origin]).unwrap(),
                    Airport::parse(AIRPORTS[destination]).unwrap(),
                    departure,
                    arrival,
                    Carrier::parse(CARRIERS[carrier_idx]).unwrap(),
                    format!("{} Air", CARRIERS[carrier_idx]),
                    1000 + i as u32,
                    price,
                    dur_mins as f64 * 8.0,
                )
                .unwrap()
            })
            .collect();
        ScheduleIndex::from_legs(legs)
    }

    proptest! {
        /// Every produced itinerary honors all of the search constraints.
        #[test]
        fn search_results_satisfy_constraints(raw in legs_strategy()) {
            let index = build_index(&raw);
            let config = SearchConfig::default();
            let planner = Planner::new(&index, &config);
            let request = SearchRequest::new(
                Airport::parse("AAA").unwrap(),
                Airport::parse("BBB").unwrap(),
                start_time(),
                Carrier::parse("AA").unwrap(),
            );

            let found = match planner.search(&request) {
                Ok(found) => found,
                Err(SearchError::NoItineraries { .. }) => return Ok(()),
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            };

            let window_end = start_time() + config.search_window();

            for itinerary in &found {
                // Leg count in [1, 4]
                prop_assert!(!itinerary.legs().is_empty());
                prop_assert!(itinerary.legs().len() <= config.max_legs);

                // Elapsed time within the cap, and consistent
                prop_assert!(itinerary.total_elapsed() <= config.max_trip_hours + 1e-9);
                prop_assert!(
                    (itinerary.flight_time() + itinerary.idle_time()
                        - itinerary.total_elapsed())
                    .abs()
                        < 1e-9
                );

                // Endpoints match the request
                prop_assert_eq!(itinerary.legs()[0].origin(), request.origin);
                prop_assert_eq!(
                    itinerary.legs()[itinerary.legs().len() - 1].destination(),
                    request.destination
                );

                // First leg departs at or after the start, inside the window
                prop_assert!(itinerary.legs()[0].departure() >= request.departure);
                for leg in itinerary.legs() {
                    prop_assert!(leg.departure() < window_end);
                }

                // Connection gaps within [1, 6] hours
                for pair in itinerary.legs().windows(2) {
                    let gap = hours_between(pair[0].arrival(), pair[1].departure());
                    prop_assert!(gap >= config.min_connection_hours - 1e-9);
                    prop_assert!(gap <= config.max_connection_hours + 1e-9);
                }

                // No airport visited twice (origin + every leg destination)
                let mut seen = HashSet::new();
                seen.insert(itinerary.legs()[0].origin());
                for leg in itinerary.legs() {
                    prop_assert!(seen.insert(leg.destination()));
                }
            }
        }

        /// The ranked pipeline output keeps scores bounded and ordered.
        #[test]
        fn plan_output_is_ranked_and_bounded(raw in legs_strategy()) {
            let index = build_index(&raw);
            let config = SearchConfig::default();
            let planner = Planner::new(&index, &config);
            let request = SearchRequest::new(
                Airport::parse("AAA").unwrap(),
                Airport::parse("BBB").unwrap(),
                start_time(),
                Carrier::parse("AA").unwrap(),
            );

            let ranked = match planner.plan(&request) {
                Ok(ranked) => ranked,
                Err(SearchError::NoItineraries { .. }) => return Ok(()),
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            };

            prop_assert!(!ranked.is_empty());

            for itinerary in &ranked {
                prop_assert!(itinerary.score() >= -1e-9);
                prop_assert!(itinerary.score() <= 1.0 + 1e-9);
                // Discount accounting stays consistent
                let expected = itinerary.original_price()
                    * (1.0 - itinerary.discount_percentage() / 100.0);
                prop_assert!((itinerary.price() - expected).abs() < 1e-6);
            }

            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score() >= pair[1].score() - 1e-9);
                if (pair[0].score() - pair[1].score()).abs() < 1e-12 {
                    prop_assert!(pair[0].price() <= pair[1].price() + 1e-9);
                }
            }
        }
    }
}
