//! Date-bucketed event index - per-day and upcoming lookups over occurrences

use std::collections::HashMap;

use chrono::NaiveDate;

use super::time::time_sort_key;
use crate::entities::Occurrence;
use crate::error::DomainError;

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`)
///
/// Only the zero-padded form is accepted; chrono alone would also take
/// single-digit fields, a signed year, or surrounding whitespace.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    let invalid = || DomainError::InvalidDate(value.to_string());
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())?;
    if date.format("%Y-%m-%d").to_string() != value {
        return Err(invalid());
    }
    Ok(date)
}

/// Occurrences on exactly `date`, ordered by time of day
///
/// Untimed occurrences come first in their input order, followed by timed ones
/// ascending by their 24-hour key. Fails if a matching occurrence carries a
/// malformed display time.
pub fn for_date(events: &[Occurrence], date: NaiveDate) -> Result<Vec<Occurrence>, DomainError> {
    let matches = events.iter().filter(|o| o.date() == date).cloned().collect();
    sort_by_time(matches)
}

/// At most `limit` occurrences on or after `from`, ascending by date
///
/// A limit of zero yields an empty list.
pub fn upcoming(events: &[Occurrence], from: NaiveDate, limit: usize) -> Vec<Occurrence> {
    if limit == 0 {
        return Vec::new();
    }
    let mut matches: Vec<Occurrence> = events
        .iter()
        .filter(|o| o.date() >= from)
        .cloned()
        .collect();
    matches.sort_by_key(Occurrence::date);
    matches.truncate(limit);
    matches
}

fn sort_by_time(occurrences: Vec<Occurrence>) -> Result<Vec<Occurrence>, DomainError> {
    let mut keyed = occurrences
        .into_iter()
        .map(|o| Ok((time_sort_key(o.time())?, o)))
        .collect::<Result<Vec<_>, DomainError>>()?;
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, o)| o).collect())
}

/// Occurrences grouped by calendar date
///
/// Built once from an expanded occurrence list; each day's bucket is already
/// ordered like [`for_date`], so day lookups are a single hash probe.
#[derive(Debug, Clone, Default)]
pub struct DateIndex {
    buckets: HashMap<NaiveDate, Vec<Occurrence>>,
    /// Bucket keys, ascending
    dates: Vec<NaiveDate>,
}

impl DateIndex {
    /// Build the index, ordering each day by time
    pub fn build(occurrences: Vec<Occurrence>) -> Result<Self, DomainError> {
        let mut grouped: HashMap<NaiveDate, Vec<Occurrence>> = HashMap::new();
        for occurrence in occurrences {
            grouped.entry(occurrence.date()).or_default().push(occurrence);
        }

        let mut buckets = HashMap::with_capacity(grouped.len());
        for (date, day) in grouped {
            buckets.insert(date, sort_by_time(day)?);
        }

        let mut dates: Vec<NaiveDate> = buckets.keys().copied().collect();
        dates.sort_unstable();

        Ok(Self { buckets, dates })
    }

    /// Occurrences on `date`, untimed first then by time
    pub fn on(&self, date: NaiveDate) -> &[Occurrence] {
        self.buckets.get(&date).map(Vec::as_slice).unwrap_or_default()
    }

    /// Dates that have at least one occurrence, ascending
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// At most `limit` occurrences on or after `from`, by date then time
    pub fn upcoming(&self, from: NaiveDate, limit: usize) -> Vec<Occurrence> {
        let start = self.dates.partition_point(|d| *d < from);
        self.dates[start..]
            .iter()
            .flat_map(|d| self.on(*d))
            .take(limit)
            .cloned()
            .collect()
    }
}
