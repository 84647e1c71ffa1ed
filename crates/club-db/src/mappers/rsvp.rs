//! RSVP entity <-> model mapper

use chrono::{DateTime, NaiveDate, Utc};
use club_core::entities::{Rsvp, RsvpStatus};
use club_core::error::DomainError;
use uuid::Uuid;

use crate::models::RsvpModel;

/// Convert RsvpModel to Rsvp entity
impl TryFrom<RsvpModel> for Rsvp {
    type Error = DomainError;

    fn try_from(model: RsvpModel) -> Result<Self, Self::Error> {
        let status = model.status.parse::<RsvpStatus>().map_err(|_| {
            DomainError::DatabaseError(format!(
                "RSVP {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(Rsvp {
            id: model.id,
            member_id: model.member_id,
            event_name: model.event_name,
            event_date: model.event_date,
            event_time: model.event_time,
            event_location: model.event_location,
            event_description: model.event_description,
            rsvp_at: model.rsvp_at,
            status,
        })
    }
}

/// Convert Rsvp entity reference to values for database insertion
pub struct RsvpInsert<'a> {
    pub id: Uuid,
    pub member_id: Uuid,
    pub event_name: &'a str,
    pub event_date: NaiveDate,
    pub event_time: Option<&'a str>,
    pub event_location: Option<&'a str>,
    pub event_description: Option<&'a str>,
    pub rsvp_at: DateTime<Utc>,
    pub status: &'static str,
}

impl<'a> RsvpInsert<'a> {
    pub fn new(rsvp: &'a Rsvp) -> Self {
        Self {
            id: rsvp.id,
            member_id: rsvp.member_id,
            event_name: &rsvp.event_name,
            event_date: rsvp.event_date,
            event_time: rsvp.event_time.as_deref(),
            event_location: rsvp.event_location.as_deref(),
            event_description: rsvp.event_description.as_deref(),
            rsvp_at: rsvp.rsvp_at,
            status: rsvp.status.as_str(),
        }
    }
}
