//! Business logic services
//!
//! Services hold every business rule; the HTTP layer only parses input and
//! renders output.

pub mod calendar;
pub mod context;
pub mod error;
pub mod rsvp;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use calendar::CalendarService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use rsvp::RsvpService;
