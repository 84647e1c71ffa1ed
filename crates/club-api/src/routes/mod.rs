//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch},
    Router,
};

use crate::handlers::{events, health, rsvps};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(event_routes()).merge(rsvp_routes())
}

/// Calendar routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/events/dates", get(events::calendar_dates))
        .route("/events/on/:date", get(events::events_on_date))
        .route("/events/upcoming", get(events::upcoming_events))
}

/// RSVP routes
fn rsvp_routes() -> Router<AppState> {
    Router::new()
        .route("/rsvps", get(rsvps::list_rsvps).post(rsvps::create_rsvp))
        .route(
            "/rsvps/:rsvp_id",
            patch(rsvps::update_rsvp_status).delete(rsvps::delete_rsvp),
        )
}
