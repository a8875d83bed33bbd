//! Invite handlers
//!
//! Endpoints for the invite lifecycle: creation, status transition, and
//! detail retrieval. The actor identity always comes from the bearer token.

use axum::{
    extract::{Path, State},
    Json,
};
use meet_core::entities::InviteStatus;
use meet_service::{
    CreateInviteRequest, InviteDetailsResponse, InviteService, TransitionInviteRequest,
};
use uuid::Uuid;

use crate::extractors::{AuthFounder, OptionalJson, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create invite
///
/// POST /invites
pub async fn create_invite(
    State(state): State<AppState>,
    auth: AuthFounder,
    ValidatedJson(request): ValidatedJson<CreateInviteRequest>,
) -> ApiResult<Created> {
    let service = InviteService::new(state.service_context());
    service.create_invite(auth.founder_id, request).await?;
    Ok(Created)
}

/// Transition invite status
///
/// PATCH /invites/{invite_id}/status/{target_status}
pub async fn update_invite_status(
    State(state): State<AppState>,
    auth: AuthFounder,
    Path((invite_id, target_status)): Path<(String, String)>,
    OptionalJson(body): OptionalJson<TransitionInviteRequest>,
) -> ApiResult<Json<InviteDetailsResponse>> {
    let invite_id: Uuid = invite_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid invite id format"))?;
    let target: InviteStatus = target_status
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid invite status"))?;

    let request = body.unwrap_or_default();

    let service = InviteService::new(state.service_context());
    let response = service
        .transition_status(auth.founder_id, invite_id, target, request)
        .await?;
    Ok(Json(response))
}

/// Get invite details
///
/// GET /invites/{invite_id}
pub async fn get_invite_details(
    State(state): State<AppState>,
    _auth: AuthFounder,
    Path(invite_id): Path<String>,
) -> ApiResult<Json<InviteDetailsResponse>> {
    let invite_id: Uuid = invite_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid invite id format"))?;

    let service = InviteService::new(state.service_context());
    let response = service.get_invite_details(invite_id).await?;
    Ok(Json(response))
}
