//! Event entity - a club event as published in the calendar

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::to_24_hour;
use crate::error::DomainError;

/// Event entity
///
/// Events are authored by organizers outside this system and are read-only here.
/// A recurring event repeats every `repeat_interval_days` days starting at `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    /// Display time such as "7:00 PM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        default,
        alias = "registrationLink",
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_link: Option<String>,
    #[serde(
        default,
        alias = "repeatInterval",
        alias = "repeatIntervalDays",
        skip_serializing_if = "Option::is_none"
    )]
    pub repeat_interval_days: Option<i64>,
}

impl Event {
    /// Create a new one-off Event
    pub fn new(id: i64, name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            time: None,
            description: String::new(),
            location: String::new(),
            image: None,
            registration_link: None,
            repeat_interval_days: None,
        }
    }

    /// Set the display time
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Make the event repeat every `days` days
    pub fn repeating_every(mut self, days: i64) -> Self {
        self.repeat_interval_days = Some(days);
        self
    }

    /// Check if the event repeats
    pub fn is_recurring(&self) -> bool {
        self.repeat_interval_days.is_some()
    }

    /// Get the validated repeat interval in days
    ///
    /// Returns `Ok(None)` for one-off events.
    pub fn repeat_interval(&self) -> Result<Option<u64>, DomainError> {
        match self.repeat_interval_days {
            None => Ok(None),
            Some(days) if days > 0 => u64::try_from(days)
                .map(Some)
                .map_err(|_| DomainError::InvalidRepeatInterval(days)),
            Some(days) => Err(DomainError::InvalidRepeatInterval(days)),
        }
    }

    /// Validate all event invariants
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError(format!(
                "Event {} has an empty name",
                self.id
            )));
        }
        if let Some(time) = &self.time {
            to_24_hour(time)?;
        }
        self.repeat_interval()?;
        Ok(())
    }
}
