//! Ports - repository traits and external collaborator interfaces

mod clients;
mod repositories;

pub use clients::{
    MailContext, MailTemplate, Mailer, MeetingScheduler, ScheduleRequest, ScheduledMeeting,
};
pub use repositories::{FounderRepository, InviteRepository, RepoResult, StartupRepository};
