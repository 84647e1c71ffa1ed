//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path/query parsing.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthMember;
pub use path::RsvpIdPath;
pub use query::ApiQuery;
pub use validated::ValidatedJson;
