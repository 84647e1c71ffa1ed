//! Calendar transforms
//!
//! Pure functions over events: display-time normalization, recurrence
//! expansion up to a horizon, and date-bucketed lookups. Nothing here reads
//! the wall clock; callers pass "today" in.

mod index;
mod recurrence;
mod time;

pub use index::{for_date, parse_date, upcoming, DateIndex};
pub use recurrence::{expand, horizon_date};
pub use time::{time_sort_key, to_24_hour};
