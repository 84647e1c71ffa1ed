//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::entities::RsvpStatus;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    /// Also returned when the RSVP exists but belongs to another member
    #[error("RSVP not found: {0}")]
    RsvpNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid time (expected H:MM AM|PM): {0}")]
    InvalidTime(String),

    #[error("Repeat interval must be a positive number of days, got {0}")]
    InvalidRepeatInterval(i64),

    #[error("Invalid RSVP status: {0}")]
    InvalidStatus(String),

    #[error("Cannot change RSVP status from {from} to {to}")]
    InvalidStatusTransition { from: RsvpStatus, to: RsvpStatus },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("You have already RSVP'd to {event_name} on {event_date}")]
    RsvpAlreadyExists {
        event_name: String,
        event_date: NaiveDate,
    },

    // =========================================================================
    // Transient Errors
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store call timed out after {0} ms")]
    Timeout(u64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Event catalog error: {0}")]
    CatalogError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::RsvpNotFound(_) => "UNKNOWN_RSVP",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::InvalidTime(_) => "INVALID_TIME",
            Self::InvalidRepeatInterval(_) => "INVALID_REPEAT_INTERVAL",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",

            // Conflict
            Self::RsvpAlreadyExists { .. } => "RSVP_ALREADY_EXISTS",

            // Transient
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Timeout(_) => "STORE_TIMEOUT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CatalogError(_) => "CATALOG_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RsvpNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidDate(_)
                | Self::InvalidTime(_)
                | Self::InvalidRepeatInterval(_)
                | Self::InvalidStatus(_)
                | Self::InvalidStatusTransition { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RsvpAlreadyExists { .. })
    }

    /// Check if the caller may retry this error later
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Timeout(_))
    }
}
