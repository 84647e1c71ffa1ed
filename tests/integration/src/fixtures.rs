//! Test fixtures and data generators
//!
//! Catalog events are dated relative to today so the calendar views stay
//! stable whenever the suite runs.

use chrono::{Days, NaiveDate, Utc};
use club_common::{AppConfig, TokenVerifier};
use club_core::entities::Event;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Today in UTC, matching the server clock
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Date `days` after today
pub fn days_from_today(days: u64) -> NaiveDate {
    today() + Days::new(days)
}

/// Date `days` before today
pub fn days_before_today(days: u64) -> NaiveDate {
    today() - Days::new(days)
}

/// Events served by the test catalog
pub fn catalog_events() -> Vec<Event> {
    vec![
        Event::new(1, "Weekly Build Night", today())
            .with_time("6:30 PM")
            .with_location("Lab 2")
            .repeating_every(7),
        Event::new(2, "Breakfast Social", days_from_today(7)).with_time("8:00 AM"),
        Event::new(3, "Open Lab", days_from_today(7)),
        Event::new(4, "Kickoff", days_before_today(30)).with_time("5:00 PM"),
    ]
}

/// Catalog file contents for `catalog_events`
pub fn catalog_json() -> String {
    serde_json::to_string(&catalog_events()).unwrap_or_else(|_| "[]".to_string())
}

/// A member nobody else in the suite uses
pub fn unique_member() -> Uuid {
    Uuid::new_v4()
}

/// Bearer token the server under test will accept for `member_id`
pub fn member_token(config: &AppConfig, member_id: Uuid) -> String {
    TokenVerifier::new(&config.auth.jwt_secret, config.auth.audience.clone())
        .issue(member_id, 3600)
        .unwrap_or_default()
}

/// Create RSVP request body
#[derive(Debug, Clone, Serialize)]
pub struct CreateRsvp {
    pub event_name: String,
    pub event_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_location: Option<String>,
}

impl CreateRsvp {
    pub fn new(event_name: &str, event_date: NaiveDate) -> Self {
        Self {
            event_name: event_name.to_string(),
            event_date: event_date.to_string(),
            event_time: None,
            event_location: None,
        }
    }

    pub fn at(mut self, time: &str) -> Self {
        self.event_time = Some(time.to_string());
        self
    }
}

/// Status change body
#[derive(Debug, Serialize)]
pub struct StatusChange {
    pub status: String,
}

impl StatusChange {
    pub fn to(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}

/// RSVP as returned by the API
#[derive(Debug, Deserialize)]
pub struct RsvpBody {
    pub id: Uuid,
    pub member_id: Uuid,
    pub event_name: String,
    pub event_date: NaiveDate,
    pub event_time: Option<String>,
    pub status: String,
}

/// Listing as returned by the API
#[derive(Debug, Deserialize)]
pub struct RsvpListBody {
    pub all: Vec<RsvpBody>,
    pub upcoming: Vec<RsvpBody>,
    pub past: Vec<RsvpBody>,
}

/// Calendar occurrence as returned by the API
#[derive(Debug, Deserialize)]
pub struct OccurrenceBody {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub is_recurrence: bool,
    pub original_date: NaiveDate,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
