//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies with length-bounded
//! fields also implement `Validate` so violations surface as field-specific
//! messages before the service runs.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use meet_core::entities::SlotId;

/// Create invite request
///
/// Slot timestamps arrive as epoch milliseconds; the actor (inviter) comes
/// from the caller's bearer token, never from the body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInviteRequest {
    pub invitee_id: Uuid,

    #[validate(length(
        min = 20,
        max = 100,
        message = "Purpose of meeting must be between 20 and 100 characters"
    ))]
    pub purpose_of_meeting: String,

    #[validate(length(
        min = 20,
        max = 200,
        message = "Additional note must be between 20 and 200 characters"
    ))]
    pub additional_note: Option<String>,

    /// First proposed slot, epoch milliseconds
    pub slot_a: i64,

    /// Second proposed slot, epoch milliseconds
    pub slot_b: i64,

    pub proposed_duration_minutes: i32,
}

/// Status transition request body
///
/// `accepted_slot_id` and `google_code` are required iff the target status
/// is `accepted`; cancel/reject take an empty body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransitionInviteRequest {
    pub accepted_slot_id: Option<SlotId>,
    pub google_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateInviteRequest {
        CreateInviteRequest {
            invitee_id: Uuid::new_v4(),
            purpose_of_meeting: "Exploring a joint pilot program".to_string(),
            additional_note: None,
            slot_a: 1_900_000_000_000,
            slot_b: 1_900_003_600_000,
            proposed_duration_minutes: 30,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_short_purpose_rejected() {
        let mut request = base_request();
        request.purpose_of_meeting = "Too short".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_note_rejected() {
        let mut request = base_request();
        request.additional_note = Some("short note".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_transition_body_parses_slot_label() {
        let body: TransitionInviteRequest =
            serde_json::from_str(r#"{"accepted_slot_id":"A","google_code":"4/abc"}"#).unwrap();
        assert_eq!(body.accepted_slot_id, Some(SlotId::A));
        assert_eq!(body.google_code.as_deref(), Some("4/abc"));
    }
}
