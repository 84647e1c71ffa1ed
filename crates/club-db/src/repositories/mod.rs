//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in club-core.

mod error;
mod event;
mod rsvp;

pub use error::{map_db_error, map_unique_violation};
pub use event::PgEventCatalog;
pub use rsvp::PgRsvpRepository;
