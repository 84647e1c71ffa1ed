//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use club_core::entities::{Occurrence, Rsvp, RsvpListing};

use super::responses::{OccurrenceResponse, RsvpListResponse, RsvpResponse};

// ============================================================================
// Calendar Mappers
// ============================================================================

impl From<Occurrence> for OccurrenceResponse {
    fn from(occurrence: Occurrence) -> Self {
        let event = occurrence.event;
        Self {
            id: event.id,
            name: event.name,
            date: event.date,
            time: event.time,
            description: event.description,
            location: event.location,
            image: event.image,
            registration_link: event.registration_link,
            repeat_interval_days: event.repeat_interval_days,
            is_recurrence: occurrence.is_recurrence,
            original_date: occurrence.original_date,
        }
    }
}

impl From<&Occurrence> for OccurrenceResponse {
    fn from(occurrence: &Occurrence) -> Self {
        Self::from(occurrence.clone())
    }
}

// ============================================================================
// RSVP Mappers
// ============================================================================

impl From<Rsvp> for RsvpResponse {
    fn from(rsvp: Rsvp) -> Self {
        Self {
            id: rsvp.id,
            member_id: rsvp.member_id,
            event_name: rsvp.event_name,
            event_date: rsvp.event_date,
            event_time: rsvp.event_time,
            event_location: rsvp.event_location,
            event_description: rsvp.event_description,
            rsvp_at: rsvp.rsvp_at,
            status: rsvp.status,
        }
    }
}

impl From<RsvpListing> for RsvpListResponse {
    fn from(listing: RsvpListing) -> Self {
        let convert = |rsvps: Vec<Rsvp>| rsvps.into_iter().map(RsvpResponse::from).collect();
        Self {
            all: convert(listing.all),
            upcoming: convert(listing.upcoming),
            past: convert(listing.past),
        }
    }
}
