//! Domain entities - core business objects

mod founder;
mod invite;
mod startup;

pub use founder::Founder;
pub use invite::{
    validate_duration, validate_proposed_slots, Invite, InviteStatus, InviteStatusParseError,
    MeetingSlot, MeetingWindow, SlotId, SlotIdParseError, MAX_DURATION_MINUTES,
    MIN_DURATION_MINUTES, MIN_LEAD_TIME_MINUTES, SCHEDULING_HORIZON_MONTHS,
};
pub use startup::Startup;
