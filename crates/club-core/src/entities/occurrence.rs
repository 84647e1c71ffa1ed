//! Occurrence - one concrete calendar date of an event

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Event;

/// A projection of an [`Event`] onto a single date
///
/// Derived, never stored. `event.date` holds the occurrence date while
/// `original_date` keeps the anchor date of the event it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(flatten)]
    pub event: Event,
    pub is_recurrence: bool,
    pub original_date: NaiveDate,
}

impl Occurrence {
    /// The anchor occurrence, identical to the event itself
    pub fn anchor(event: &Event) -> Self {
        Self {
            event: event.clone(),
            is_recurrence: false,
            original_date: event.date,
        }
    }

    /// A generated occurrence of `event` on `date`
    pub fn recurrence(event: &Event, date: NaiveDate) -> Self {
        let mut projected = event.clone();
        projected.date = date;
        Self {
            event: projected,
            is_recurrence: true,
            original_date: event.date,
        }
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.event.date
    }

    #[inline]
    pub fn time(&self) -> Option<&str> {
        self.event.time.as_deref()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.event.name
    }
}
