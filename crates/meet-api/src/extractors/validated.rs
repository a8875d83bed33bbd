//! JSON body extractors
//!
//! `ValidatedJson` runs the `validator` rules after deserializing, so
//! field-specific messages surface before any handler code runs.
//! `OptionalJson` tolerates an absent body.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

fn body_rejection(rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(e) => ApiError::invalid_body(e.to_string()),
        JsonRejection::JsonSyntaxError(e) => ApiError::invalid_body(e.to_string()),
        JsonRejection::MissingJsonContentType(e) => ApiError::invalid_body(e.to_string()),
        _ => ApiError::invalid_body("Invalid JSON body"),
    }
}

/// JSON body that has passed its `Validate` rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(body_rejection)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// JSON body that may be absent entirely.
///
/// Cancel/reject transitions carry no body; accept carries one.
#[derive(Debug, Clone)]
pub struct OptionalJson<T>(pub Option<T>);

#[async_trait]
impl<S, T> FromRequest<S> for OptionalJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let has_body = req
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<usize>().ok())
            .is_some_and(|len| len > 0);

        if !has_body {
            return Ok(OptionalJson(None));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(body_rejection)?;
        Ok(OptionalJson(Some(value)))
    }
}
