//! RSVP handlers
//!
//! Every route acts on the authenticated member's own RSVPs.

use axum::{extract::State, Json};
use club_service::dto::{
    CreateRsvpRequest, ListRsvpsQuery, RsvpListResponse, RsvpResponse, UpdateRsvpStatusRequest,
};
use club_service::RsvpService;

use crate::extractors::{ApiQuery, AuthMember, RsvpIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the caller's RSVPs split into upcoming and past
///
/// GET /rsvps
pub async fn list_rsvps(
    State(state): State<AppState>,
    auth: AuthMember,
    ApiQuery(query): ApiQuery<ListRsvpsQuery>,
) -> ApiResult<Json<RsvpListResponse>> {
    let service = RsvpService::new(state.service_context());
    let listing = service.list_rsvps(auth.member_id, query).await?;
    Ok(Json(listing))
}

/// RSVP to an event instance
///
/// POST /rsvps
pub async fn create_rsvp(
    State(state): State<AppState>,
    auth: AuthMember,
    ValidatedJson(request): ValidatedJson<CreateRsvpRequest>,
) -> ApiResult<Created<Json<RsvpResponse>>> {
    let service = RsvpService::new(state.service_context());
    let rsvp = service.create_rsvp(auth.member_id, request).await?;
    Ok(Created(Json(rsvp)))
}

/// Change an RSVP's status
///
/// PATCH /rsvps/{rsvp_id}
pub async fn update_rsvp_status(
    State(state): State<AppState>,
    auth: AuthMember,
    RsvpIdPath(rsvp_id): RsvpIdPath,
    ValidatedJson(request): ValidatedJson<UpdateRsvpStatusRequest>,
) -> ApiResult<Json<RsvpResponse>> {
    let service = RsvpService::new(state.service_context());
    let rsvp = service
        .update_rsvp_status(auth.member_id, rsvp_id, request)
        .await?;
    Ok(Json(rsvp))
}

/// Delete an RSVP
///
/// DELETE /rsvps/{rsvp_id}
pub async fn delete_rsvp(
    State(state): State<AppState>,
    auth: AuthMember,
    RsvpIdPath(rsvp_id): RsvpIdPath,
) -> ApiResult<NoContent> {
    let service = RsvpService::new(state.service_context());
    service.delete_rsvp(auth.member_id, rsvp_id).await?;
    Ok(NoContent)
}
