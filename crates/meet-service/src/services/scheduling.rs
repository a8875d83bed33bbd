//! Scheduling coordinator
//!
//! Computes the meeting window and delegates to the external calendar
//! provider. Single attempt, no retry; the caller decides whether a failure
//! aborts the whole transition.

use chrono::{DateTime, Duration, Utc};
use tracing::{info, instrument};

use meet_core::entities::Founder;
use meet_core::traits::{ScheduleRequest, ScheduledMeeting};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Scheduling coordinator
pub struct SchedulingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SchedulingService<'a> {
    /// Create a new SchedulingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Schedule the external meeting for the chosen slot
    #[instrument(skip(self, inviter, invitee, auth_code))]
    pub async fn schedule_meeting(
        &self,
        inviter: &Founder,
        invitee: &Founder,
        starts_at: DateTime<Utc>,
        duration_minutes: i32,
        auth_code: &str,
    ) -> ServiceResult<ScheduledMeeting> {
        let ends_at = starts_at + Duration::minutes(i64::from(duration_minutes));

        let request = ScheduleRequest {
            summary: format!("{}'s founder meeting", inviter.first_name),
            starts_at,
            ends_at,
            attendee_emails: vec![inviter.email.clone(), invitee.email.clone()],
            auth_code: auth_code.to_string(),
        };

        let scheduled = self.ctx.scheduler().schedule(&request).await?;

        info!(
            start = %starts_at,
            end = %ends_at,
            "External meeting scheduled"
        );

        Ok(scheduled)
    }
}
