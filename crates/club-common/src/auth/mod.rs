//! Authentication utilities
//!
//! Members sign in with the hosted identity provider; this module only
//! verifies the bearer tokens it issues.

mod jwt;

pub use jwt::{Claims, TokenVerifier};
