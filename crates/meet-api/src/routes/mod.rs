//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{health, invites};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// exported separately so it can bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    invite_routes()
}

/// Invite routes
fn invite_routes() -> Router<AppState> {
    Router::new()
        .route("/invites", post(invites::create_invite))
        .route("/invites/:invite_id", get(invites::get_invite_details))
        .route(
            "/invites/:invite_id/status/:target_status",
            patch(invites::update_invite_status),
        )
}
