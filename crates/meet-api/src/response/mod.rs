//! Response types and error handling for API endpoints
//!
//! Every error is flattened to one uniform envelope at this boundary:
//! kind, numeric code, machine-readable short code, human message, and an
//! opaque correlation id that is also written to the log line for the
//! failure. Internal exception details never reach the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use meet_common::AppError;
use meet_core::DomainError;
use meet_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use uuid::Uuid;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid authorization header format")]
    InvalidAuthFormat,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::App(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Domain(e) => domain_status(e),
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::MissingAuth | Self::InvalidAuthFormat => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the machine-readable short code
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPath(_) => "INVALID_PATH_PARAMETER",
            Self::InvalidBody(_) => "INVALID_REQUEST_BODY",
            Self::MissingAuth => "MISSING_AUTHORIZATION",
            Self::InvalidAuthFormat => "INVALID_AUTHORIZATION_FORMAT",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the coarse error kind for the envelope
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(e) => domain_kind(e),
            Self::Service(ServiceError::Domain(e)) => domain_kind(e),
            Self::App(AppError::Domain(e)) => domain_kind(e),
            Self::Service(e) => kind_from_status(e.status_code()),
            Self::App(e) => kind_from_status(e.status_code()),
            Self::Validation(_) | Self::InvalidPath(_) | Self::InvalidBody(_) => "validation_error",
            Self::MissingAuth | Self::InvalidAuthFormat => "authorization_error",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid path parameter error
    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }

    /// Create an invalid request body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }
}

fn domain_status(e: &DomainError) -> StatusCode {
    if e.is_not_found() {
        StatusCode::NOT_FOUND
    } else if e.is_authorization() {
        StatusCode::UNAUTHORIZED
    } else if e.is_validation() || e.is_conflict() {
        StatusCode::BAD_REQUEST
    } else if matches!(e, DomainError::MailDelivery(_)) {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn domain_kind(e: &DomainError) -> &'static str {
    if e.is_not_found() {
        "not_found_error"
    } else if e.is_authorization() {
        "authorization_error"
    } else if e.is_conflict() {
        "conflict_error"
    } else if e.is_external() {
        "external_service_error"
    } else if e.is_validation() {
        "validation_error"
    } else {
        "internal_error"
    }
}

fn kind_from_status(status: u16) -> &'static str {
    match status {
        404 => "not_found_error",
        401 | 403 => "authorization_error",
        400 => "validation_error",
        _ => "internal_error",
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Coarse error kind
    pub kind: &'static str,
    /// Numeric HTTP-status-equivalent code
    pub code: u16,
    /// Machine-readable short code
    pub short_code: String,
    /// Human-readable message
    pub message: String,
    /// Opaque id for log lookup
    pub correlation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let correlation_id = Uuid::new_v4().to_string();

        // Every error is logged with its correlation id; only the generic
        // message below reaches the client.
        if status.is_server_error() {
            error!(error = ?self, correlation_id = %correlation_id, "Request failed");
        } else {
            debug!(error = %self, correlation_id = %correlation_id, "Request rejected");
        }

        // Field-level details for validation errors
        let details = if let Self::Validation(errors) = &self {
            Some(serde_json::to_value(errors).unwrap_or_default())
        } else {
            None
        };

        let message = if status.is_server_error() {
            // internal exception details never reach the client
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            error: ErrorDetail {
                kind: self.kind(),
                code: status.as_u16(),
                short_code: self.error_code().to_string(),
                message,
                correlation_id,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with no payload
pub struct Created;

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        StatusCode::CREATED.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MissingAuth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidPath("test".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Domain(DomainError::ActiveEngagementExists).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Domain(DomainError::NotInviteParty).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Domain(DomainError::InviteNotFound(Uuid::nil())).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_api_error_codes() {
        assert_eq!(ApiError::MissingAuth.error_code(), "MISSING_AUTHORIZATION");
        assert_eq!(
            ApiError::InvalidPath("test".to_string()).error_code(),
            "INVALID_PATH_PARAMETER"
        );
        assert_eq!(
            ApiError::Domain(DomainError::InviteLimitReached).error_code(),
            "INVITE_LIMIT_REACHED"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ApiError::Domain(DomainError::ActiveEngagementExists).kind(),
            "conflict_error"
        );
        assert_eq!(
            ApiError::Domain(DomainError::SlotTooSoon).kind(),
            "validation_error"
        );
        assert_eq!(
            ApiError::Domain(DomainError::MailDelivery("x".to_string())).kind(),
            "external_service_error"
        );
        assert_eq!(ApiError::MissingAuth.kind(), "authorization_error");
    }
}
