//! Request DTOs for API endpoints
//!
//! Body DTOs implement `Deserialize` and `Validate`; query DTOs carry raw
//! strings so malformed values surface as domain validation errors.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// RSVP Requests
// ============================================================================

/// Register for an event instance
///
/// The event details are a snapshot shown on the member's RSVP list; they are
/// not checked against the catalog.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRsvpRequest {
    #[validate(length(min = 1, max = 200, message = "Event name must be 1-200 characters"))]
    pub event_name: String,

    /// Calendar date, `YYYY-MM-DD`
    pub event_date: String,

    #[validate(length(max = 20, message = "Event time must be at most 20 characters"))]
    pub event_time: Option<String>,

    #[validate(length(max = 200, message = "Event location must be at most 200 characters"))]
    pub event_location: Option<String>,

    #[validate(length(max = 2000, message = "Event description must be at most 2000 characters"))]
    pub event_description: Option<String>,
}

/// Change the status of an RSVP
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRsvpStatusRequest {
    /// `confirmed` or `cancelled`
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

/// Query for listing the caller's RSVPs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListRsvpsQuery {
    /// Restrict to one status
    pub status: Option<String>,
}

// ============================================================================
// Calendar Requests
// ============================================================================

/// Query for the expanded calendar
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CalendarQuery {
    /// Overrides the configured expansion horizon
    #[validate(range(max = 36, message = "Horizon must be at most 36 months"))]
    pub horizon_months: Option<u32>,
}

/// Query for upcoming events
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpcomingQuery {
    /// First date to include, `YYYY-MM-DD`; defaults to today
    pub from: Option<String>,
    /// Maximum number of occurrences; defaults to 3
    pub limit: Option<i64>,
}
