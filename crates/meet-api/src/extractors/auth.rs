//! Authentication extractor
//!
//! Resolves the Authorization bearer token to a founder id. The token may
//! outlive the account it names, so the founder's existence is re-checked
//! on every request; a vanished founder is a 401.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated founder extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthFounder {
    /// Founder ID from the token subject
    pub founder_id: Uuid,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthFounder
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        let founder_id = app_state
            .jwt_service()
            .verify_token(bearer.token())
            .and_then(|claims| claims.founder_id())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected bearer token");
                ApiError::InvalidAuthFormat
            })?;

        let founder = app_state
            .service_context()
            .founder_repo()
            .find_by_id(founder_id)
            .await
            .map_err(ApiError::Domain)?;

        if founder.is_none() {
            tracing::warn!(founder_id = %founder_id, "Token names an unknown founder");
            return Err(ApiError::InvalidAuthFormat);
        }

        Ok(AuthFounder { founder_id })
    }
}
