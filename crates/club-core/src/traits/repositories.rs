//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::{Event, Rsvp, RsvpStatus};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// RSVP Repository
// ============================================================================

/// Every lookup and mutation is scoped to the owning member, so a row owned by
/// someone else is indistinguishable from a missing one.
#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Find an RSVP by ID for its owner
    async fn find_for_member(&self, member_id: Uuid, rsvp_id: Uuid) -> RepoResult<Option<Rsvp>>;

    /// Find the non-cancelled RSVP for a member and event instance
    async fn find_active(
        &self,
        member_id: Uuid,
        event_name: &str,
        event_date: NaiveDate,
    ) -> RepoResult<Option<Rsvp>>;

    /// List a member's RSVPs, optionally filtered by status
    async fn find_by_member(
        &self,
        member_id: Uuid,
        status: Option<RsvpStatus>,
    ) -> RepoResult<Vec<Rsvp>>;

    /// Insert a new RSVP
    ///
    /// Implementations must enforce one active RSVP per
    /// (member, event name, event date) and report a violation as
    /// `DomainError::RsvpAlreadyExists`.
    async fn create(&self, rsvp: &Rsvp) -> RepoResult<()>;

    /// Change the status of an owned RSVP, returning the updated row
    async fn update_status(
        &self,
        member_id: Uuid,
        rsvp_id: Uuid,
        status: RsvpStatus,
    ) -> RepoResult<Option<Rsvp>>;

    /// Hard delete an owned RSVP, returning whether a row was removed
    async fn delete(&self, member_id: Uuid, rsvp_id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Event Catalog
// ============================================================================

/// Source of raw (unexpanded) events
#[async_trait]
pub trait EventCatalog: Send + Sync {
    /// List every published event
    async fn list_events(&self) -> RepoResult<Vec<Event>>;
}
