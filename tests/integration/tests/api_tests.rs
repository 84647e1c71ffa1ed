//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, SUPABASE_JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, days_before_today, days_from_today, fixtures::*,
    TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Calendar Tests
// ============================================================================

#[tokio::test]
async fn test_expanded_calendar_includes_recurrences() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/events").await.unwrap();
    let events: Vec<OccurrenceBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let weekly: Vec<_> = events.iter().filter(|o| o.id == 1).collect();
    assert!(weekly.len() > 1);
    assert!(!weekly[0].is_recurrence);
    assert!(weekly[1..].iter().all(|o| o.is_recurrence && o.original_date == today()));
    assert!(events.windows(2).all(|w| w[0].date <= w[1].date));

    // Past one-off events stay in the full calendar
    assert!(events.iter().any(|o| o.name == "Kickoff"));
}

#[tokio::test]
async fn test_events_on_date_orders_untimed_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let path = format!("/api/v1/events/on/{}", days_from_today(7));
    let response = server.get(&path).await.unwrap();
    let day: Vec<OccurrenceBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<_> = day.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Open Lab", "Breakfast Social", "Weekly Build Night"]);
    assert_eq!(day[2].time.as_deref(), Some("6:30 PM"));
}

#[tokio::test]
async fn test_events_on_invalid_date() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/events/on/next-tuesday").await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_DATE");
}

#[tokio::test]
async fn test_upcoming_skips_past_events() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/events/upcoming?limit=10").await.unwrap();
    let upcoming: Vec<OccurrenceBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!upcoming.is_empty());
    assert!(upcoming.len() <= 10);
    assert!(upcoming.iter().all(|o| o.date >= today()));
    assert!(upcoming.iter().all(|o| o.name != "Kickoff"));

    let response = server.get("/api/v1/events/upcoming").await.unwrap();
    let default: Vec<OccurrenceBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(default.len(), 3);
}

#[tokio::test]
async fn test_calendar_dates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/events/dates").await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    let dates: Vec<String> = serde_json::from_value(body["dates"].clone()).unwrap();
    assert!(dates.contains(&days_before_today(30).to_string()));
    assert!(dates.contains(&days_from_today(7).to_string()));
}

// ============================================================================
// RSVP Tests
// ============================================================================

#[tokio::test]
async fn test_rsvp_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/rsvps").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let request = CreateRsvp::new("Open Lab", days_from_today(7));
    let response = server.post("/api/v1/rsvps", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/v1/rsvps", "garbage").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_rsvp_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let member = unique_member();
    let token = server.token_for(member);
    let request = CreateRsvp::new("Breakfast Social", days_from_today(7)).at("8:00 AM");

    // Create
    let response = server.post_auth("/api/v1/rsvps", &token, &request).await.unwrap();
    let created: RsvpBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.member_id, member);
    assert_eq!(created.status, "confirmed");
    assert_eq!(created.event_time.as_deref(), Some("8:00 AM"));

    // Duplicate active RSVP
    let response = server.post_auth("/api/v1/rsvps", &token, &request).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(err.error.code, "RSVP_ALREADY_EXISTS");

    // Cancel
    let path = format!("/api/v1/rsvps/{}", created.id);
    let response = server
        .patch_auth(&path, &token, &StatusChange::to("cancelled"))
        .await
        .unwrap();
    let cancelled: RsvpBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, "cancelled");

    // A cancelled RSVP does not block a new one
    let response = server.post_auth("/api/v1/rsvps", &token, &request).await.unwrap();
    let again: RsvpBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_ne!(again.id, created.id);

    // Listing carries both, filterable by status
    let response = server.get_auth("/api/v1/rsvps", &token).await.unwrap();
    let listing: RsvpListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.all.len(), 2);
    assert_eq!(listing.upcoming.len(), 2);
    assert!(listing.past.is_empty());

    let response = server
        .get_auth("/api/v1/rsvps?status=confirmed", &token)
        .await
        .unwrap();
    let confirmed: RsvpListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(confirmed.all.len(), 1);
    assert_eq!(confirmed.all[0].id, again.id);

    // Delete
    let path = format!("/api/v1/rsvps/{}", again.id);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(err.error.code, "UNKNOWN_RSVP");
}

#[tokio::test]
async fn test_past_rsvps_are_partitioned() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.token_for(unique_member());

    let past = CreateRsvp::new("Kickoff", days_before_today(30));
    let response = server.post_auth("/api/v1/rsvps", &token, &past).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let today_rsvp = CreateRsvp::new("Weekly Build Night", today());
    let response = server.post_auth("/api/v1/rsvps", &token, &today_rsvp).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/v1/rsvps", &token).await.unwrap();
    let listing: RsvpListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.past.len(), 1);
    assert_eq!(listing.past[0].event_name, "Kickoff");
    // Today counts as upcoming
    assert_eq!(listing.upcoming.len(), 1);
    assert_eq!(listing.upcoming[0].event_date, today());
}

#[tokio::test]
async fn test_rsvps_are_private_to_member() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let owner = server.token_for(unique_member());
    let intruder = server.token_for(unique_member());

    let request = CreateRsvp::new("Open Lab", days_from_today(7));
    let response = server.post_auth("/api/v1/rsvps", &owner, &request).await.unwrap();
    let created: RsvpBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/rsvps/{}", created.id);
    let response = server
        .patch_auth(&path, &intruder, &StatusChange::to("cancelled"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth(&path, &intruder).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/api/v1/rsvps", &intruder).await.unwrap();
    let listing: RsvpListBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listing.all.is_empty());
}

#[tokio::test]
async fn test_rsvp_validation_errors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.token_for(unique_member());

    let bad_date = CreateRsvp {
        event_date: "2025-02-30".to_string(),
        ..CreateRsvp::new("Open Lab", days_from_today(7))
    };
    let response = server.post_auth("/api/v1/rsvps", &token, &bad_date).await.unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_DATE");

    let blank_name = CreateRsvp::new("   ", days_from_today(7));
    let response = server.post_auth("/api/v1/rsvps", &token, &blank_name).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let request = CreateRsvp::new("Open Lab", days_from_today(7));
    let response = server.post_auth("/api/v1/rsvps", &token, &request).await.unwrap();
    let created: RsvpBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let path = format!("/api/v1/rsvps/{}", created.id);
    let response = server
        .patch_auth(&path, &token, &StatusChange::to("maybe"))
        .await
        .unwrap();
    let err: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(err.error.code, "INVALID_STATUS");

    let response = server
        .get_auth("/api/v1/rsvps?status=maybe", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .delete_auth("/api/v1/rsvps/not-a-uuid", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
