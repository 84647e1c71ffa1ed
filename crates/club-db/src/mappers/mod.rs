//! Entity to model mappers
//!
//! This module provides conversions between domain entities (club-core) and database models.
//! - `From<EventModel> for Event`: rows are already valid by table constraints
//! - `TryFrom<RsvpModel> for Rsvp`: the status column is parsed back into `RsvpStatus`

mod event;
mod rsvp;

pub use rsvp::RsvpInsert;
