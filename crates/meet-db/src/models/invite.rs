//! Invite database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the invites table
///
/// `status` and `accepted_slot_id` are stored as their wire strings and
/// parsed when mapping to the entity.
#[derive(Debug, Clone, FromRow)]
pub struct InviteModel {
    pub id: Uuid,
    pub inviter_id: Uuid,
    pub invitee_id: Uuid,
    pub purpose_of_meeting: String,
    pub additional_note: Option<String>,
    pub slot_a_starts_at: DateTime<Utc>,
    pub slot_b_starts_at: DateTime<Utc>,
    pub proposed_duration_minutes: i32,
    pub status: String,
    pub accepted_slot_id: Option<String>,
    pub meeting_link: Option<String>,
    pub meeting_window_start: Option<DateTime<Utc>>,
    pub meeting_window_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
