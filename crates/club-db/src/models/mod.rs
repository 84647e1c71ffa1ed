//! Database models - SQLx-compatible structs for PostgreSQL tables

mod event;
mod rsvp;

pub use event::EventModel;
pub use rsvp::RsvpModel;
