//! Calendar service
//!
//! Reads the event catalog and projects it onto concrete dates relative to the
//! clock's today.

use tracing::{debug, instrument};
use validator::Validate;

use chrono::NaiveDate;
use club_core::calendar::{expand, parse_date, DateIndex};
use club_core::entities::Occurrence;

use crate::dto::{CalendarDatesResponse, CalendarQuery, OccurrenceResponse, UpcomingQuery};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of upcoming occurrences returned when no limit is given
pub const DEFAULT_UPCOMING_LIMIT: usize = 3;

/// Calendar service
pub struct CalendarService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CalendarService<'a> {
    /// Create a new CalendarService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Every occurrence up to the horizon, ascending by date
    #[instrument(skip(self))]
    pub async fn expanded(&self, query: CalendarQuery) -> ServiceResult<Vec<OccurrenceResponse>> {
        query
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let occurrences = self.occurrences(query.horizon_months).await?;
        Ok(occurrences.into_iter().map(OccurrenceResponse::from).collect())
    }

    /// Occurrences on one date, untimed first then by time of day
    #[instrument(skip(self))]
    pub async fn events_for_date(&self, date: &str) -> ServiceResult<Vec<OccurrenceResponse>> {
        let date = parse_date(date)?;
        let index = self.index().await?;
        Ok(index.on(date).iter().map(OccurrenceResponse::from).collect())
    }

    /// The next few occurrences on or after `from` (today by default), by date then time
    #[instrument(skip(self))]
    pub async fn upcoming(&self, query: UpcomingQuery) -> ServiceResult<Vec<OccurrenceResponse>> {
        let limit = match query.limit {
            None => DEFAULT_UPCOMING_LIMIT,
            Some(n) => usize::try_from(n)
                .map_err(|_| ServiceError::validation(format!("Limit must not be negative, got {n}")))?,
        };
        let from = match query.from.as_deref() {
            Some(raw) => parse_date(raw)?,
            None => self.ctx.clock().today(),
        };

        let index = self.index().await?;
        Ok(index
            .upcoming(from, limit)
            .into_iter()
            .map(OccurrenceResponse::from)
            .collect())
    }

    /// Dates within the horizon that have at least one occurrence
    #[instrument(skip(self))]
    pub async fn calendar_dates(&self) -> ServiceResult<CalendarDatesResponse> {
        let index = self.index().await?;
        Ok(CalendarDatesResponse {
            dates: index.dates().to_vec(),
        })
    }

    async fn index(&self) -> ServiceResult<DateIndex> {
        Ok(DateIndex::build(self.occurrences(None).await?)?)
    }

    /// Today according to the service clock
    pub fn today(&self) -> NaiveDate {
        self.ctx.clock().today()
    }

    async fn occurrences(&self, horizon_months: Option<u32>) -> ServiceResult<Vec<Occurrence>> {
        let events = self
            .ctx
            .store_call(self.ctx.event_catalog().list_events())
            .await?;

        let horizon = horizon_months.unwrap_or(self.ctx.calendar().horizon_months);
        let occurrences = expand(&events, horizon, self.ctx.clock().today())?;

        debug!(
            events = events.len(),
            occurrences = occurrences.len(),
            horizon_months = horizon,
            "Expanded event catalog"
        );
        Ok(occurrences)
    }
}
