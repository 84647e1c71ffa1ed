//! Recurrence expander - turns recurring events into concrete occurrences

use chrono::{Days, Months, NaiveDate};

use crate::entities::{Event, Occurrence};
use crate::error::DomainError;

/// Last date (inclusive) that expansion may generate, `horizon_months` after `today`
pub fn horizon_date(today: NaiveDate, horizon_months: u32) -> Result<NaiveDate, DomainError> {
    today
        .checked_add_months(Months::new(horizon_months))
        .ok_or_else(|| {
            DomainError::ValidationError(format!(
                "Horizon of {horizon_months} months from {today} is out of range"
            ))
        })
}

/// Expand events into occurrences up to `today + horizon_months`
///
/// Every event contributes its anchor occurrence exactly once, even when the
/// anchor lies beyond the horizon. A recurring event additionally contributes
/// `date + n * interval` for every `n >= 1` whose date does not exceed the
/// horizon. The merged result is sorted by date; occurrences sharing a date
/// keep their input order.
///
/// Fails without emitting anything if any event has a non-positive interval.
pub fn expand(
    events: &[Event],
    horizon_months: u32,
    today: NaiveDate,
) -> Result<Vec<Occurrence>, DomainError> {
    let horizon = horizon_date(today, horizon_months)?;
    let mut occurrences = Vec::with_capacity(events.len());

    for event in events {
        let interval = event.repeat_interval()?;
        occurrences.push(Occurrence::anchor(event));

        let Some(step) = interval else {
            continue;
        };

        let mut cursor = event.date;
        // Terminates: the cursor strictly increases and is bounded by the horizon.
        while let Some(next) = cursor.checked_add_days(Days::new(step)) {
            if next > horizon {
                break;
            }
            occurrences.push(Occurrence::recurrence(event, next));
            cursor = next;
        }
    }

    occurrences.sort_by_key(Occurrence::date);
    Ok(occurrences)
}
