//! External collaborator ports - mail delivery and calendar scheduling
//!
//! Implementations are constructed once at process start and injected
//! through the service context; nothing here holds mutable global state.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::MeetingWindow;
use crate::error::DomainError;

/// The six lifecycle messages, one per (event, recipient) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTemplate {
    /// Confirmation to the inviter that the invite went out
    InviteSentToInviter,
    /// Notification to the invitee that an invite arrived
    InviteReceivedToInvitee,
    /// Notification to the invitee that the inviter canceled
    InviteCanceledToInvitee,
    /// Notification to the inviter that the invitee rejected
    InviteRejectedToInviter,
    /// Confirmation to the invitee that the meeting is scheduled
    InviteAcceptedToInvitee,
    /// Notification to the inviter that the meeting is scheduled
    InviteAcceptedToInviter,
}

/// Everything a template needs to render for one recipient
#[derive(Debug, Clone)]
pub struct MailContext {
    pub recipient_email: String,
    pub inviter_first_name: String,
    pub invitee_first_name: String,
    /// Recipient-scoped details link with an embedded time-limited token
    pub invite_link: String,
}

/// Outbound transactional mail port
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one templated message. Any non-success outcome at the
    /// provider is surfaced as `DomainError::MailDelivery`.
    async fn send(&self, template: MailTemplate, context: &MailContext)
        -> Result<(), DomainError>;
}

/// Scheduling request handed to the calendar provider
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    pub summary: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub attendee_emails: Vec<String>,
    /// Per-request OAuth authorization code supplied by the accepting party
    pub auth_code: String,
}

/// Scheduling result returned by the calendar provider
#[derive(Debug, Clone)]
pub struct ScheduledMeeting {
    pub meeting_link: String,
    pub window: MeetingWindow,
}

/// External calendar-scheduling port
#[async_trait]
pub trait MeetingScheduler: Send + Sync {
    /// Create the meeting with the provider. Single attempt; any provider
    /// error or malformed response is surfaced as `DomainError::Scheduling`.
    async fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduledMeeting, DomainError>;
}
