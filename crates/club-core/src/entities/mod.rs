//! Domain entities - core business objects

mod event;
mod occurrence;
mod rsvp;

pub use event::Event;
pub use occurrence::Occurrence;
pub use rsvp::{Rsvp, RsvpDetails, RsvpListing, RsvpStatus};
