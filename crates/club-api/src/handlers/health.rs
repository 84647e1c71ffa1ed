//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use club_service::dto::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with backing store health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let ctx = state.service_context();

    // Without a pool the RSVP store is in-process
    let db_healthy = match ctx.pool() {
        Some(pool) => pool.acquire().await.is_ok(),
        None => true,
    };

    let catalog_healthy = ctx
        .store_call(ctx.event_catalog().list_events())
        .await
        .is_ok();

    let response = ReadinessResponse::ready(db_healthy, catalog_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
