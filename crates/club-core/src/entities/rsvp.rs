//! RSVP entity - a member's registration for one event instance

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// RSVP status
///
/// `absent -> confirmed -> cancelled`, with hard delete returning to `absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    Confirmed,
    Cancelled,
}

impl RsvpStatus {
    /// Database / wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether this status counts towards the one-active-RSVP rule
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Event details copied onto the RSVP at registration time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpDetails {
    pub event_time: Option<String>,
    pub event_location: Option<String>,
    pub event_description: Option<String>,
}

/// RSVP entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    pub id: Uuid,
    pub member_id: Uuid,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_time: Option<String>,
    pub event_location: Option<String>,
    pub event_description: Option<String>,
    pub rsvp_at: DateTime<Utc>,
    pub status: RsvpStatus,
}

impl Rsvp {
    /// Create a new confirmed RSVP
    pub fn new(
        member_id: Uuid,
        event_name: impl Into<String>,
        event_date: NaiveDate,
        details: RsvpDetails,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            event_name: event_name.into(),
            event_date,
            event_time: details.event_time,
            event_location: details.event_location,
            event_description: details.event_description,
            rsvp_at: Utc::now(),
            status: RsvpStatus::Confirmed,
        }
    }

    /// Check if the RSVP blocks another registration for the same event
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// An RSVP is upcoming when its event date is today or later
    #[inline]
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.event_date >= today
    }

    /// Check whether a status change is allowed
    ///
    /// Returns `Ok(false)` when `to` equals the current status.
    pub fn check_transition(&self, to: RsvpStatus) -> Result<bool, DomainError> {
        match (self.status, to) {
            (from, to) if from == to => Ok(false),
            (RsvpStatus::Confirmed, RsvpStatus::Cancelled) => Ok(true),
            (from, to) => Err(DomainError::InvalidStatusTransition { from, to }),
        }
    }
}

/// A member's RSVPs split around "today"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RsvpListing {
    pub all: Vec<Rsvp>,
    pub upcoming: Vec<Rsvp>,
    pub past: Vec<Rsvp>,
}

impl RsvpListing {
    /// Partition RSVPs by event date relative to `today`
    ///
    /// `all` is ordered by event date; every RSVP lands in exactly one of
    /// `upcoming` or `past`.
    pub fn partition(mut rsvps: Vec<Rsvp>, today: NaiveDate) -> Self {
        rsvps.sort_by_key(|r| r.event_date);
        let (upcoming, past): (Vec<Rsvp>, Vec<Rsvp>) =
            rsvps.iter().cloned().partition(|r| r.is_upcoming(today));
        Self {
            all: rsvps,
            upcoming,
            past,
        }
    }
}
