//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use mappers::InviteWithParties;
pub use requests::{CreateInviteRequest, TransitionInviteRequest};
pub use responses::{
    HealthResponse, InviteDetails, InviteDetailsResponse, MeetingWindowDetails, PartyDetails,
    ReadinessResponse, SlotDetails,
};
