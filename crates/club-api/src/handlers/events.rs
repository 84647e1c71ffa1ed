//! Calendar handlers
//!
//! Read-only views over the expanded event catalog. No authentication needed.

use axum::{
    extract::{Path, State},
    Json,
};
use club_service::dto::{CalendarDatesResponse, CalendarQuery, OccurrenceResponse, UpcomingQuery};
use club_service::CalendarService;

use crate::extractors::ApiQuery;
use crate::response::ApiResult;
use crate::state::AppState;

/// Expanded calendar up to the horizon
///
/// GET /events
pub async fn list_events(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CalendarQuery>,
) -> ApiResult<Json<Vec<OccurrenceResponse>>> {
    let service = CalendarService::new(state.service_context());
    let occurrences = service.expanded(query).await?;
    Ok(Json(occurrences))
}

/// Dates that carry at least one occurrence, for calendar highlighting
///
/// GET /events/dates
pub async fn calendar_dates(State(state): State<AppState>) -> ApiResult<Json<CalendarDatesResponse>> {
    let service = CalendarService::new(state.service_context());
    Ok(Json(service.calendar_dates().await?))
}

/// Occurrences on one date
///
/// GET /events/on/{date}
pub async fn events_on_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> ApiResult<Json<Vec<OccurrenceResponse>>> {
    let service = CalendarService::new(state.service_context());
    let occurrences = service.events_for_date(&date).await?;
    Ok(Json(occurrences))
}

/// Next occurrences from a date
///
/// GET /events/upcoming
pub async fn upcoming_events(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UpcomingQuery>,
) -> ApiResult<Json<Vec<OccurrenceResponse>>> {
    let service = CalendarService::new(state.service_context());
    let occurrences = service.upcoming(query).await?;
    Ok(Json(occurrences))
}
