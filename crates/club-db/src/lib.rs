//! # club-db
//!
//! Persistence layer implementing the repository and catalog traits from
//! `club-core`.
//!
//! ## Overview
//!
//! - Connection pool management and bundled SQL migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgRsvpRepository` and `PgEventCatalog`
//! - `JsonEventCatalog` for deployments that publish events as a static file
//!
//! ## Usage
//!
//! ```rust,ignore
//! use club_db::{create_pool, run_migrations, DatabaseConfig, PgRsvpRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let rsvp_repo = PgRsvpRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use catalog::JsonEventCatalog;
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgEventCatalog, PgRsvpRepository};
