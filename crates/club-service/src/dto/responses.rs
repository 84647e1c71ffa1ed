//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use club_core::entities::RsvpStatus;

// ============================================================================
// Calendar Responses
// ============================================================================

/// One dated instance of an event
#[derive(Debug, Clone, Serialize)]
pub struct OccurrenceResponse {
    pub id: i64,
    pub name: String,
    /// Date of this instance
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub description: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_interval_days: Option<i64>,
    /// False for the event's own date
    pub is_recurrence: bool,
    /// The event's anchor date
    pub original_date: NaiveDate,
}

/// Dates that have at least one occurrence
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDatesResponse {
    pub dates: Vec<NaiveDate>,
}

// ============================================================================
// RSVP Responses
// ============================================================================

/// RSVP response
#[derive(Debug, Clone, Serialize)]
pub struct RsvpResponse {
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

/// A member's RSVPs split around today
#[derive(Debug, Clone, Serialize)]
pub struct RsvpListResponse {
    pub all: Vec<RsvpResponse>,
    pub upcoming: Vec<RsvpResponse>,
    pub past: Vec<RsvpResponse>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub event_catalog: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, catalog_healthy: bool) -> Self {
        let all_healthy = database_healthy && catalog_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                event_catalog: if catalog_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true, true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false, true);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
        assert_eq!(not_ready.checks.event_catalog, "healthy");
    }

    #[test]
    fn test_rsvp_status_serializes_lowercase() {
        let json = serde_json::to_value(RsvpStatus::Cancelled).unwrap();
        assert_eq!(json, "cancelled");
    }
}
