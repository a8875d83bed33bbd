//! Test fixtures and data generators

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create invite payload
#[derive(Debug, Serialize)]
pub struct CreateInvitePayload {
    pub invitee_id: Uuid,
    pub purpose_of_meeting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_note: Option<String>,
    pub slot_a: i64,
    pub slot_b: i64,
    pub proposed_duration_minutes: i32,
}

impl CreateInvitePayload {
    /// A payload that passes every validation rule
    pub fn valid(invitee_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            invitee_id,
            purpose_of_meeting: "Exploring a joint pilot program".to_string(),
            additional_note: None,
            slot_a: (now + Duration::hours(2)).timestamp_millis(),
            slot_b: (now + Duration::hours(4)).timestamp_millis(),
            proposed_duration_minutes: 30,
        }
    }
}

/// Error envelope returned by every failing endpoint
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub kind: String,
    pub code: u16,
    pub short_code: String,
    pub message: String,
    pub correlation_id: String,
}

/// Invite details envelope
#[derive(Debug, Deserialize)]
pub struct InviteDetailsEnvelope {
    pub invite_details: InviteDetailsBody,
    pub inviter_details: PartyBody,
    pub invitee_details: PartyBody,
}

#[derive(Debug, Deserialize)]
pub struct InviteDetailsBody {
    pub invite_id: String,
    pub status: String,
    pub proposed_duration_minutes: i32,
}

#[derive(Debug, Deserialize)]
pub struct PartyBody {
    pub founder_id: String,
    pub first_name: String,
    pub startup_name: String,
}
