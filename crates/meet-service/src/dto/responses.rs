//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. UUIDs are
//! serialized as strings; party details are limited to id, names, and
//! startup - no private fields cross the boundary.

use chrono::{DateTime, Utc};
use serde::Serialize;

use meet_core::entities::{InviteStatus, SlotId};

// ============================================================================
// Invite Responses
// ============================================================================

/// The projected invite shape returned by detail and transition endpoints
#[derive(Debug, Serialize)]
pub struct InviteDetailsResponse {
    pub invite_details: InviteDetails,
    pub inviter_details: PartyDetails,
    pub invitee_details: PartyDetails,
}

/// Invite fields of the projection
#[derive(Debug, Serialize)]
pub struct InviteDetails {
    pub invite_id: String,
    pub purpose_of_meeting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_note: Option<String>,
    pub slot_a: SlotDetails,
    pub slot_b: SlotDetails,
    pub proposed_duration_minutes: i32,
    pub status: InviteStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accepted_slot_id: Option<SlotId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_window: Option<MeetingWindowDetails>,
    pub created_at: DateTime<Utc>,
}

/// One labeled proposed slot
#[derive(Debug, Serialize)]
pub struct SlotDetails {
    pub id: SlotId,
    pub starts_at: DateTime<Utc>,
}

/// Confirmed meeting window, present once accepted
#[derive(Debug, Serialize)]
pub struct MeetingWindowDetails {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Public founder projection (id, names, startup only)
#[derive(Debug, Serialize)]
pub struct PartyDetails {
    pub founder_id: String,
    pub first_name: String,
    pub last_name: String,
    pub startup_id: String,
    pub startup_name: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
