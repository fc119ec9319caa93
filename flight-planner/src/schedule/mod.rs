//! Schedule loading and lookup.
//!
//! The boundary with the external schedule loader: raw trip records come
//! in, get validated into domain legs, and end up in a read-only
//! origin-indexed structure the search engine queries.

mod index;
mod loader;

pub use index::ScheduleIndex;
pub use loader::{RawSchedule, ScheduleError, TripRecord, build_legs};
