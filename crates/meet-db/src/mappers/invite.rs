//! Invite entity <-> model mapper
//!
//! Status and slot labels are stored as strings; an unrecognized value in
//! the database maps to an internal error rather than panicking.

use meet_core::entities::{Invite, InviteStatus, MeetingSlot, MeetingWindow, SlotId};
use meet_core::error::DomainError;

use crate::models::InviteModel;

impl TryFrom<InviteModel> for Invite {
    type Error = DomainError;

    fn try_from(model: InviteModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<InviteStatus>()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        let accepted_slot_id = model
            .accepted_slot_id
            .as_deref()
            .map(str::parse::<SlotId>)
            .transpose()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        let meeting_window = match (model.meeting_window_start, model.meeting_window_end) {
            (Some(start), Some(end)) => Some(MeetingWindow { start, end }),
            _ => None,
        };

        Ok(Invite {
            id: model.id,
            inviter_id: model.inviter_id,
            invitee_id: model.invitee_id,
            purpose_of_meeting: model.purpose_of_meeting,
            additional_note: model.additional_note,
            slot_a: MeetingSlot {
                id: SlotId::A,
                starts_at: model.slot_a_starts_at,
            },
            slot_b: MeetingSlot {
                id: SlotId::B,
                starts_at: model.slot_b_starts_at,
            },
            duration_minutes: model.proposed_duration_minutes,
            status,
            accepted_slot_id,
            meeting_link: model.meeting_link,
            meeting_window,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_model() -> InviteModel {
        let now = Utc::now();
        InviteModel {
            id: Uuid::new_v4(),
            inviter_id: Uuid::new_v4(),
            invitee_id: Uuid::new_v4(),
            purpose_of_meeting: "Discuss a potential integration partnership".to_string(),
            additional_note: None,
            slot_a_starts_at: now,
            slot_b_starts_at: now,
            proposed_duration_minutes: 30,
            status: "pending".to_string(),
            accepted_slot_id: None,
            meeting_link: None,
            meeting_window_start: None,
            meeting_window_end: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_maps_pending_model() {
        let invite = Invite::try_from(sample_model()).unwrap();
        assert_eq!(invite.status, InviteStatus::Pending);
        assert!(invite.accepted_slot_id.is_none());
        assert!(invite.meeting_window.is_none());
    }

    #[test]
    fn test_maps_accepted_model() {
        let mut model = sample_model();
        model.status = "accepted".to_string();
        model.accepted_slot_id = Some("B".to_string());
        model.meeting_link = Some("https://meet.example.com/abc".to_string());
        model.meeting_window_start = Some(Utc::now());
        model.meeting_window_end = Some(Utc::now());

        let invite = Invite::try_from(model).unwrap();
        assert_eq!(invite.status, InviteStatus::Accepted);
        assert_eq!(invite.accepted_slot_id, Some(SlotId::B));
        assert!(invite.meeting_window.is_some());
    }

    #[test]
    fn test_unknown_status_is_internal_error() {
        let mut model = sample_model();
        model.status = "archived".to_string();
        assert!(matches!(
            Invite::try_from(model),
            Err(DomainError::InternalError(_))
        ));
    }
}
