//! RSVP service
//!
//! Tracks each member's registrations. A member holds at most one non-cancelled
//! RSVP per (event name, event date); every lookup and mutation is scoped to the
//! calling member, so another member's RSVP reads as not found.

use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use club_core::calendar::parse_date;
use club_core::entities::{Rsvp, RsvpDetails, RsvpListing, RsvpStatus};
use club_core::error::DomainError;

use crate::dto::{
    CreateRsvpRequest, ListRsvpsQuery, RsvpListResponse, RsvpResponse, UpdateRsvpStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// RSVP service
pub struct RsvpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RsvpService<'a> {
    /// Create a new RsvpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register the member for an event instance
    #[instrument(skip(self, request), fields(event_name = %request.event_name))]
    pub async fn create_rsvp(
        &self,
        member_id: Uuid,
        request: CreateRsvpRequest,
    ) -> ServiceResult<RsvpResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let event_name = request.event_name.trim();
        if event_name.is_empty() {
            return Err(ServiceError::validation("Event name is required"));
        }
        let event_date = parse_date(&request.event_date)?;

        // Fast path; the store's unique index still arbitrates concurrent inserts
        if self
            .ctx
            .store_call(self.ctx.rsvp_repo().find_active(member_id, event_name, event_date))
            .await?
            .is_some()
        {
            return Err(DomainError::RsvpAlreadyExists {
                event_name: event_name.to_string(),
                event_date,
            }
            .into());
        }

        let rsvp = Rsvp::new(
            member_id,
            event_name,
            event_date,
            RsvpDetails {
                event_time: request.event_time,
                event_location: request.event_location,
                event_description: request.event_description,
            },
        );

        self.ctx.store_call(self.ctx.rsvp_repo().create(&rsvp)).await?;

        info!(
            rsvp_id = %rsvp.id,
            member_id = %member_id,
            event_date = %event_date,
            "RSVP created"
        );

        Ok(RsvpResponse::from(rsvp))
    }

    /// Change the status of one of the member's RSVPs
    ///
    /// Setting the current status again is a no-op. Only `confirmed -> cancelled`
    /// changes anything; a cancelled RSVP is re-activated by creating a new one.
    #[instrument(skip(self, request))]
    pub async fn update_rsvp_status(
        &self,
        member_id: Uuid,
        rsvp_id: Uuid,
        request: UpdateRsvpStatusRequest,
    ) -> ServiceResult<RsvpResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let status = request.status.parse::<RsvpStatus>()?;

        let existing = self
            .ctx
            .store_call(self.ctx.rsvp_repo().find_for_member(member_id, rsvp_id))
            .await?
            .ok_or(DomainError::RsvpNotFound(rsvp_id))?;

        if !existing.check_transition(status)? {
            return Ok(RsvpResponse::from(existing));
        }

        // Row may have been deleted since the read
        let updated = self
            .ctx
            .store_call(self.ctx.rsvp_repo().update_status(member_id, rsvp_id, status))
            .await?
            .ok_or(DomainError::RsvpNotFound(rsvp_id))?;

        info!(rsvp_id = %rsvp_id, status = %status, "RSVP status changed");

        Ok(RsvpResponse::from(updated))
    }

    /// Remove one of the member's RSVPs entirely
    #[instrument(skip(self))]
    pub async fn delete_rsvp(&self, member_id: Uuid, rsvp_id: Uuid) -> ServiceResult<()> {
        let removed = self
            .ctx
            .store_call(self.ctx.rsvp_repo().delete(member_id, rsvp_id))
            .await?;

        if !removed {
            return Err(DomainError::RsvpNotFound(rsvp_id).into());
        }

        info!(rsvp_id = %rsvp_id, member_id = %member_id, "RSVP deleted");
        Ok(())
    }

    /// List the member's RSVPs split into upcoming and past
    #[instrument(skip(self))]
    pub async fn list_rsvps(
        &self,
        member_id: Uuid,
        query: ListRsvpsQuery,
    ) -> ServiceResult<RsvpListResponse> {
        let status = query
            .status
            .as_deref()
            .map(str::parse::<RsvpStatus>)
            .transpose()?;

        let rsvps = self
            .ctx
            .store_call(self.ctx.rsvp_repo().find_by_member(member_id, status))
            .await?;

        let listing = RsvpListing::partition(rsvps, self.ctx.clock().today());
        Ok(RsvpListResponse::from(listing))
    }
}
