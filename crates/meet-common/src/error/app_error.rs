//! Application error types
//!
//! Errors shared across the non-domain layers: token verification, wiring
//! and configuration, plus a wrapper for domain errors so one type can
//! travel through the stack. Conflict-class domain failures map to 400,
//! matching the invite API's external contract.

use meet_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::InvalidToken | Self::TokenExpired => 401,
            Self::NotFound(_) => 404,
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,
            Self::Domain(e) => domain_status(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

fn domain_status(e: &DomainError) -> u16 {
    if e.is_not_found() {
        404
    } else if e.is_authorization() {
        401
    } else if e.is_validation() || e.is_conflict() {
        400
    } else if matches!(e, DomainError::MailDelivery(_)) {
        // mail failures are retryable by the caller; scheduling is not
        400
    } else {
        500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidToken.status_code(), 401);
        assert_eq!(AppError::NotFound("invite".to_string()).status_code(), 404);
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_error_status_codes() {
        assert_eq!(
            AppError::Domain(DomainError::ActiveEngagementExists).status_code(),
            400
        );
        assert_eq!(
            AppError::Domain(DomainError::NotInviteParty).status_code(),
            401
        );
        assert_eq!(
            AppError::Domain(DomainError::MailDelivery("x".to_string())).status_code(),
            400
        );
        assert_eq!(
            AppError::Domain(DomainError::Scheduling("x".to_string())).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidToken.error_code(), "INVALID_TOKEN");
        assert_eq!(
            AppError::NotFound("invite".to_string()).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            AppError::Domain(DomainError::InviteLimitReached).error_code(),
            "INVITE_LIMIT_REACHED"
        );
    }
}
