//! # club-core
//!
//! Domain layer containing the event and RSVP entities, the calendar transforms
//! (time normalization, recurrence expansion, date-bucketed lookup), repository
//! traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod calendar;
pub mod entities;
pub mod error;
pub mod traits;

// Re-export commonly used types at crate root
pub use calendar::{expand, for_date, parse_date, to_24_hour, upcoming, DateIndex};
pub use entities::{Event, Occurrence, Rsvp, RsvpDetails, RsvpListing, RsvpStatus};
pub use error::DomainError;
pub use traits::{Clock, EventCatalog, FixedClock, RepoResult, RsvpRepository, SystemClock};
