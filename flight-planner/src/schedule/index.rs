//! Origin-indexed schedule lookup.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::domain::{Airport, Leg};

use super::loader::{RawSchedule, ScheduleError, build_legs};

/// Read-only index of schedule legs, grouped by origin airport and sorted
/// by departure time within each group.
///
/// Built once from the loaded schedule; lookups never mutate it.
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    by_origin: HashMap<Airport, Vec<Leg>>,
}

impl ScheduleIndex {
    /// Build an index from a flat list of validated legs.
    pub fn from_legs(legs: Vec<Leg>) -> Self {
        let mut by_origin: HashMap<Airport, Vec<Leg>> = HashMap::new();
        for leg in legs {
            by_origin.entry(leg.origin()).or_default().push(leg);
        }
        for group in by_origin.values_mut() {
            group.sort_by_key(Leg::departure);
        }
        Self { by_origin }
    }

    /// Validate a raw schedule and build the index in one step.
    ///
    /// # Errors
    ///
    /// Returns the load-time validation failure for any malformed record.
    pub fn from_raw(raw: &RawSchedule) -> Result<Self, ScheduleError> {
        Ok(Self::from_legs(build_legs(raw)?))
    }

    /// Returns all legs departing `origin`, ordered by departure time.
    /// Empty if the origin is unknown.
    pub fn departures_from(&self, origin: Airport) -> &[Leg] {
        self.by_origin.get(&origin).map_or(&[], Vec::as_slice)
    }

    /// Returns the legs departing `origin` whose departure time falls in
    /// `[window_start, window_end)`, ordered by departure time.
    pub fn departures_between(
        &self,
        origin: Airport,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> &[Leg] {
        let legs = self.departures_from(origin);
        let lo = legs.partition_point(|leg| leg.departure() < window_start);
        let hi = legs.partition_point(|leg| leg.departure() < window_end);
        &legs[lo..hi]
    }

    /// Returns the origins that have at least one departing leg.
    pub fn origins(&self) -> impl Iterator<Item = Airport> + '_ {
        self.by_origin.keys().copied()
    }

    /// Returns the total number of indexed legs.
    pub fn len(&self) -> usize {
        self.by_origin.values().map(Vec::len).sum()
    }

    /// Returns true if the index holds no legs.
    pub fn is_empty(&self) -> bool {
        self.by_origin.is_empty()
    }
}
