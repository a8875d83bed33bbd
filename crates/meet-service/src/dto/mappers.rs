//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use meet_core::entities::{Founder, Invite, Startup};

use super::responses::{
    InviteDetails, InviteDetailsResponse, MeetingWindowDetails, PartyDetails, SlotDetails,
};

/// An invite together with both parties and their startups, as loaded for
/// the detail and transition responses
#[derive(Debug, Clone)]
pub struct InviteWithParties {
    pub invite: Invite,
    pub inviter: Founder,
    pub inviter_startup: Startup,
    pub invitee: Founder,
    pub invitee_startup: Startup,
}

impl From<(&Founder, &Startup)> for PartyDetails {
    fn from((founder, startup): (&Founder, &Startup)) -> Self {
        Self {
            founder_id: founder.id.to_string(),
            first_name: founder.first_name.clone(),
            last_name: founder.last_name.clone(),
            startup_id: startup.id.to_string(),
            startup_name: startup.name.clone(),
        }
    }
}

impl From<&Invite> for InviteDetails {
    fn from(invite: &Invite) -> Self {
        Self {
            invite_id: invite.id.to_string(),
            purpose_of_meeting: invite.purpose_of_meeting.clone(),
            additional_note: invite.additional_note.clone(),
            slot_a: SlotDetails {
                id: invite.slot_a.id,
                starts_at: invite.slot_a.starts_at,
            },
            slot_b: SlotDetails {
                id: invite.slot_b.id,
                starts_at: invite.slot_b.starts_at,
            },
            proposed_duration_minutes: invite.duration_minutes,
            status: invite.status,
            accepted_slot_id: invite.accepted_slot_id,
            meeting_link: invite.meeting_link.clone(),
            meeting_window: invite.meeting_window.map(|w| MeetingWindowDetails {
                start: w.start,
                end: w.end,
            }),
            created_at: invite.created_at,
        }
    }
}

impl From<&InviteWithParties> for InviteDetailsResponse {
    fn from(loaded: &InviteWithParties) -> Self {
        Self {
            invite_details: InviteDetails::from(&loaded.invite),
            inviter_details: PartyDetails::from((&loaded.inviter, &loaded.inviter_startup)),
            invitee_details: PartyDetails::from((&loaded.invitee, &loaded.invitee_startup)),
        }
    }
}

impl From<InviteWithParties> for InviteDetailsResponse {
    fn from(loaded: InviteWithParties) -> Self {
        Self::from(&loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use meet_core::entities::{InviteStatus, SlotId};
    use uuid::Uuid;

    fn loaded() -> InviteWithParties {
        let now = Utc::now();
        let inviter_startup = Startup::new(Uuid::new_v4(), "Acme Robotics".to_string());
        let invitee_startup = Startup::new(Uuid::new_v4(), "Globex Analytics".to_string());
        let inviter = Founder::new(
            Uuid::new_v4(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@acme.example".to_string(),
            inviter_startup.id,
        );
        let invitee = Founder::new(
            Uuid::new_v4(),
            "Grace".to_string(),
            "Hopper".to_string(),
            "grace@globex.example".to_string(),
            invitee_startup.id,
        );
        let invite = Invite::new(
            Uuid::new_v4(),
            inviter.id,
            invitee.id,
            "Kick off a data-sharing pilot".to_string(),
            None,
            now + Duration::hours(1),
            now + Duration::hours(2),
            45,
        );
        InviteWithParties {
            invite,
            inviter,
            inviter_startup,
            invitee,
            invitee_startup,
        }
    }

    #[test]
    fn test_projection_carries_public_fields_only() {
        let response = InviteDetailsResponse::from(loaded());
        assert_eq!(response.invite_details.status, InviteStatus::Pending);
        assert_eq!(response.invite_details.slot_a.id, SlotId::A);
        assert_eq!(response.inviter_details.first_name, "Ada");
        assert_eq!(response.invitee_details.startup_name, "Globex Analytics");

        // private fields (email, profile flag) never appear in the shape
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["inviter_details"].get("email").is_none());
        assert!(json["inviter_details"].get("profile_complete").is_none());
    }
}
