//! # meet-service
//!
//! Application layer containing the invite lifecycle state machine, the
//! notification dispatcher, the scheduling coordinator, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used request/response types
pub use dto::{
    CreateInviteRequest, HealthResponse, InviteDetails, InviteDetailsResponse, InviteWithParties,
    MeetingWindowDetails, PartyDetails, ReadinessResponse, SlotDetails, TransitionInviteRequest,
};

// Re-export services
pub use services::{
    InviteService, NotificationService, SchedulingService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
