//! Invite entity - a proposed meeting between two founders
//!
//! Carries the two candidate slots, the lifecycle status, and the scheduling
//! result once the invite has been accepted. The temporal rules for proposed
//! slots live here as pure functions so they can be checked without touching
//! any infrastructure.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::error::DomainError;

/// Minimum lead time between "now" and either proposed slot, in minutes
pub const MIN_LEAD_TIME_MINUTES: i64 = 30;

/// Scheduling horizon in calendar months (not a fixed number of days)
pub const SCHEDULING_HORIZON_MONTHS: u32 = 1;

/// Proposed meeting duration bounds, in minutes
pub const MIN_DURATION_MINUTES: i32 = 15;
pub const MAX_DURATION_MINUTES: i32 = 120;

/// Invite lifecycle status
///
/// `pending` is the only state transitions are permitted from; all other
/// states are terminal for this lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    Pending,
    Accepted,
    Rejected,
    Canceled,
}

impl InviteStatus {
    /// Status as the lowercase wire/storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Canceled => "canceled",
        }
    }

    /// Check whether no further transition is permitted from this status
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized status strings
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid invite status: {0}")]
pub struct InviteStatusParseError(pub String);

impl FromStr for InviteStatus {
    type Err = InviteStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            "canceled" => Ok(Self::Canceled),
            other => Err(InviteStatusParseError(other.to_string())),
        }
    }
}

/// Label for one of the two proposed slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotId {
    A,
    B,
}

impl SlotId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized slot labels
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid slot id: {0}")]
pub struct SlotIdParseError(pub String);

impl FromStr for SlotId {
    type Err = SlotIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            other => Err(SlotIdParseError(other.to_string())),
        }
    }
}

/// A labeled candidate meeting timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingSlot {
    pub id: SlotId,
    pub starts_at: DateTime<Utc>,
}

/// The confirmed meeting window returned by the scheduling provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Invite entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub id: Uuid,
    pub inviter_id: Uuid,
    pub invitee_id: Uuid,
    pub purpose_of_meeting: String,
    pub additional_note: Option<String>,
    pub slot_a: MeetingSlot,
    pub slot_b: MeetingSlot,
    pub duration_minutes: i32,
    pub status: InviteStatus,
    pub accepted_slot_id: Option<SlotId>,
    pub meeting_link: Option<String>,
    pub meeting_window: Option<MeetingWindow>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invite {
    /// Create a new pending Invite
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        inviter_id: Uuid,
        invitee_id: Uuid,
        purpose_of_meeting: String,
        additional_note: Option<String>,
        slot_a: DateTime<Utc>,
        slot_b: DateTime<Utc>,
        duration_minutes: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            inviter_id,
            invitee_id,
            purpose_of_meeting,
            additional_note,
            slot_a: MeetingSlot {
                id: SlotId::A,
                starts_at: slot_a,
            },
            slot_b: MeetingSlot {
                id: SlotId::B,
                starts_at: slot_b,
            },
            duration_minutes,
            status: InviteStatus::Pending,
            accepted_slot_id: None,
            meeting_link: None,
            meeting_window: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Get the proposed slot carrying the given label
    pub fn slot(&self, id: SlotId) -> &MeetingSlot {
        match id {
            SlotId::A => &self.slot_a,
            SlotId::B => &self.slot_b,
        }
    }

    /// Check whether `founder_id` is one of the two parties
    pub fn is_party(&self, founder_id: Uuid) -> bool {
        self.inviter_id == founder_id || self.invitee_id == founder_id
    }

    /// Check whether at least one proposed slot is still in the future
    pub fn has_future_slot(&self, now: DateTime<Utc>) -> bool {
        self.slot_a.starts_at >= now || self.slot_b.starts_at >= now
    }

    /// Check whether both proposed slots are already in the past, meaning the
    /// meeting window has lapsed and no transition is permitted
    pub fn window_lapsed(&self, now: DateTime<Utc>) -> bool {
        self.slot_a.starts_at < now && self.slot_b.starts_at < now
    }

    /// Check whether no further transition is permitted
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Validate the two proposed slots against the temporal rules.
///
/// Pure function of its inputs. Each slot must lie strictly between
/// `now + 30 minutes` and `now + 1 calendar month`, and the two slots must
/// carry distinct timestamps. The checks run in the same order the errors
/// are surfaced to callers: future/horizon, lead time, distinctness.
pub fn validate_proposed_slots(
    slot_a: DateTime<Utc>,
    slot_b: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), DomainError> {
    let horizon = now + Months::new(SCHEDULING_HORIZON_MONTHS);
    if slot_a < now || slot_b < now {
        return Err(DomainError::SlotInPast);
    }
    if slot_a > horizon || slot_b > horizon {
        return Err(DomainError::SlotBeyondHorizon);
    }

    let earliest = now + chrono::Duration::minutes(MIN_LEAD_TIME_MINUTES);
    if slot_a < earliest || slot_b < earliest {
        return Err(DomainError::SlotTooSoon);
    }

    if slot_a == slot_b {
        return Err(DomainError::SlotsNotDistinct);
    }

    Ok(())
}

/// Validate the proposed meeting duration bounds
pub fn validate_duration(minutes: i32) -> Result<(), DomainError> {
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
        return Err(DomainError::InvalidDuration);
    }
    Ok(())
}
