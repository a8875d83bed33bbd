//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::entities::InviteStatus;

/// Domain layer errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Founder not found: {0}")]
    FounderNotFound(Uuid),

    #[error("Startup not found: {0}")]
    StartupNotFound(Uuid),

    #[error("Invite not found: {0}")]
    InviteNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Inviter and invitee must be different founders")]
    SelfInvite,

    #[error("Profiles of inviter or invitee are incomplete")]
    ProfilesIncomplete,

    #[error("Proposed meeting times must be in the future")]
    SlotInPast,

    #[error("Proposed meeting times cannot be more than one month from now")]
    SlotBeyondHorizon,

    #[error("Meetings must be scheduled at least 30 minutes from now")]
    SlotTooSoon,

    #[error("Both proposed meeting times cannot be the same")]
    SlotsNotDistinct,

    #[error("Meeting duration must be between 15 and 120 minutes")]
    InvalidDuration,

    #[error("An accepted slot and a scheduling credential are required to accept an invite")]
    MissingAcceptParams,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not a party to this invite")]
    NotInviteParty,

    // =========================================================================
    // Role Violations (inviter vs invitee)
    // =========================================================================
    #[error("You cannot accept or reject this invite as you are the inviter")]
    InviterCannotRespond,

    #[error("You cannot cancel this invite as you are the invitee")]
    InviteeCannotCancel,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("You already have a meeting scheduled with this founder")]
    ActiveEngagementExists,

    #[error("You have exceeded the number of invites you can send in a day")]
    InviteLimitReached,

    #[error("Invite already {0}")]
    AlreadyTransitioned(InviteStatus),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("The proposed meeting times for this invite have already passed")]
    MeetingWindowLapsed,

    #[error("You cannot accept this invite as the chosen meeting time has already passed")]
    AcceptedSlotInPast,

    // =========================================================================
    // External Collaborator Failures
    // =========================================================================
    #[error("Mail delivery failed: {0}")]
    MailDelivery(String),

    #[error("Meeting scheduling failed: {0}")]
    Scheduling(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::FounderNotFound(_) => "UNKNOWN_FOUNDER",
            Self::StartupNotFound(_) => "UNKNOWN_STARTUP",
            Self::InviteNotFound(_) => "UNKNOWN_INVITE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::SelfInvite => "SELF_INVITE",
            Self::ProfilesIncomplete => "PROFILES_INCOMPLETE",
            Self::SlotInPast => "SLOT_IN_PAST",
            Self::SlotBeyondHorizon => "SLOT_BEYOND_HORIZON",
            Self::SlotTooSoon => "SLOT_TOO_SOON",
            Self::SlotsNotDistinct => "SLOTS_NOT_DISTINCT",
            Self::InvalidDuration => "INVALID_DURATION",
            Self::MissingAcceptParams => "MISSING_ACCEPT_PARAMS",

            // Authorization
            Self::NotInviteParty => "NOT_INVITE_PARTY",

            // Role violations
            Self::InviterCannotRespond => "INVITER_CANNOT_RESPOND",
            Self::InviteeCannotCancel => "INVITEE_CANNOT_CANCEL",

            // Conflict
            Self::ActiveEngagementExists => "ACTIVE_ENGAGEMENT_EXISTS",
            Self::InviteLimitReached => "INVITE_LIMIT_REACHED",
            Self::AlreadyTransitioned(_) => "ALREADY_TRANSITIONED",

            // Business Rules
            Self::MeetingWindowLapsed => "MEETING_WINDOW_LAPSED",
            Self::AcceptedSlotInPast => "ACCEPTED_SLOT_IN_PAST",

            // External collaborators
            Self::MailDelivery(_) => "MAIL_DELIVERY_FAILED",
            Self::Scheduling(_) => "SCHEDULING_FAILED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::FounderNotFound(_) | Self::StartupNotFound(_) | Self::InviteNotFound(_)
        )
    }

    /// Check if this is a validation or business-rule error (400-class)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::SelfInvite
                | Self::ProfilesIncomplete
                | Self::SlotInPast
                | Self::SlotBeyondHorizon
                | Self::SlotTooSoon
                | Self::SlotsNotDistinct
                | Self::InvalidDuration
                | Self::MissingAcceptParams
                | Self::InviterCannotRespond
                | Self::InviteeCannotCancel
                | Self::MeetingWindowLapsed
                | Self::AcceptedSlotInPast
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotInviteParty)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ActiveEngagementExists | Self::InviteLimitReached | Self::AlreadyTransitioned(_)
        )
    }

    /// Check if this is an external collaborator failure
    pub fn is_external(&self) -> bool {
        matches!(self, Self::MailDelivery(_) | Self::Scheduling(_))
    }
}
