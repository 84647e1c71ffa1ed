//! RSVP database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for rsvps table
#[derive(Debug, Clone, FromRow)]
pub struct RsvpModel {
    pub id: Uuid,
    pub member_id: Uuid,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_time: Option<String>,
    pub event_location: Option<String>,
    pub event_description: Option<String>,
    pub rsvp_at: DateTime<Utc>,
    /// 'confirmed' or 'cancelled'
    pub status: String,
}
