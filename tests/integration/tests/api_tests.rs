//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the meet-db migrations applied
//! - Environment variable: DATABASE_URL
//!
//! They never reach the external mail/calendar providers: every covered
//! request fails validation, authentication, or lookup before the first
//! outbound call would happen.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use uuid::Uuid;

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
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_create_invite_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let payload = CreateInvitePayload::valid(Uuid::new_v4());

    let response = server.post("/api/v1/invites", &payload).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body.error.short_code, "MISSING_AUTHORIZATION");
    assert!(!body.error.correlation_id.is_empty());
}

#[tokio::test]
async fn test_token_for_unknown_founder_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let token = server.token_for(Uuid::new_v4());
    let payload = CreateInvitePayload::valid(Uuid::new_v4());

    let response = server
        .post_auth("/api/v1/invites", &token, &payload)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_create_invite_rejects_short_purpose() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let founder_id = server.seed_founder("Vala").await.unwrap();
    let token = server.token_for(founder_id);

    let mut payload = CreateInvitePayload::valid(Uuid::new_v4());
    payload.purpose_of_meeting = "Too short".to_string();

    let response = server
        .post_auth("/api/v1/invites", &token, &payload)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.kind, "validation_error");
}

#[tokio::test]
async fn test_create_invite_rejects_self_invite() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let founder_id = server.seed_founder("Selene").await.unwrap();
    let token = server.token_for(founder_id);

    let payload = CreateInvitePayload::valid(founder_id);
    let response = server
        .post_auth("/api/v1/invites", &token, &payload)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.short_code, "SELF_INVITE");
}

#[tokio::test]
async fn test_transition_rejects_unknown_status() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let founder_id = server.seed_founder("Status").await.unwrap();
    let token = server.token_for(founder_id);

    let response = server
        .patch_auth(
            &format!("/api/v1/invites/{}/status/archived", Uuid::new_v4()),
            &token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.short_code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Details Tests
// ============================================================================

#[tokio::test]
async fn test_get_invite_details_projects_both_parties() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let inviter_id = server.seed_founder("Ada").await.unwrap();
    let invitee_id = server.seed_founder("Grace").await.unwrap();
    let invite_id = server
        .seed_pending_invite(inviter_id, invitee_id)
        .await
        .unwrap();
    let token = server.token_for(inviter_id);

    let response = server
        .get_auth(&format!("/api/v1/invites/{invite_id}"), &token)
        .await
        .unwrap();
    let body: InviteDetailsEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.invite_details.invite_id, invite_id.to_string());
    assert_eq!(body.invite_details.status, "pending");
    assert_eq!(body.invite_details.proposed_duration_minutes, 30);
    assert_eq!(body.inviter_details.founder_id, inviter_id.to_string());
    assert_eq!(body.inviter_details.first_name, "Ada");
    assert_eq!(body.inviter_details.startup_name, "Ada Ventures");
    assert_eq!(body.invitee_details.founder_id, invitee_id.to_string());
}

#[tokio::test]
async fn test_get_unknown_invite_is_404() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let founder_id = server.seed_founder("Detail").await.unwrap();
    let token = server.token_for(founder_id);

    let response = server
        .get_auth(&format!("/api/v1/invites/{}", Uuid::new_v4()), &token)
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.kind, "not_found_error");
    assert_eq!(body.error.code, 404);
}

#[tokio::test]
async fn test_get_invite_with_malformed_id_is_400() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let founder_id = server.seed_founder("Malformed").await.unwrap();
    let token = server.token_for(founder_id);

    let response = server
        .get_auth("/api/v1/invites/not-a-uuid", &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}
