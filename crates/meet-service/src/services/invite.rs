//! Invite lifecycle state machine
//!
//! Drives invite creation, status transitions, and detail retrieval. All
//! checks run against data read at the start of the call; the persisted
//! transition is an atomic conditional update on `status = 'pending'`, so a
//! concurrent transition surfaces as "already <status>".

use chrono::{Duration, Utc};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use meet_core::entities::{
    validate_duration, validate_proposed_slots, Invite, InviteStatus, SlotId,
};
use meet_core::DomainError;

use crate::dto::{
    CreateInviteRequest, InviteDetailsResponse, InviteWithParties, TransitionInviteRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notification::NotificationService;
use super::scheduling::SchedulingService;

/// Maximum invites one founder may create within the rolling window
pub const MAX_INVITES_PER_WINDOW: i64 = 5;

/// Rolling rate-limit window, in hours
pub const INVITE_WINDOW_HOURS: i64 = 24;

/// Invite lifecycle service
pub struct InviteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InviteService<'a> {
    /// Create a new InviteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new pending invite between two founders.
    ///
    /// On success both parties have been notified; if either notification
    /// fails, the just-created record is deleted again and the call fails.
    /// Success carries no payload - callers re-fetch details separately.
    #[instrument(skip(self, request), fields(inviter_id = %inviter_id))]
    pub async fn create_invite(
        &self,
        inviter_id: Uuid,
        request: CreateInviteRequest,
    ) -> ServiceResult<()> {
        let now = Utc::now();

        if inviter_id == request.invitee_id {
            return Err(DomainError::SelfInvite.into());
        }

        // Both parties must exist and be fully onboarded. A missing founder
        // is a 400-class failure here, not a 404: the invite itself is what
        // the caller is creating.
        let inviter = self
            .ctx
            .founder_repo()
            .find_by_id(inviter_id)
            .await?
            .ok_or_else(|| ServiceError::validation("Invalid inviter or invitee"))?;
        let invitee = self
            .ctx
            .founder_repo()
            .find_by_id(request.invitee_id)
            .await?
            .ok_or_else(|| ServiceError::validation("Invalid inviter or invitee"))?;

        if !inviter.profile_complete || !invitee.profile_complete {
            return Err(DomainError::ProfilesIncomplete.into());
        }

        let slot_a = chrono::DateTime::from_timestamp_millis(request.slot_a)
            .ok_or_else(|| ServiceError::validation("Invalid meeting time"))?;
        let slot_b = chrono::DateTime::from_timestamp_millis(request.slot_b)
            .ok_or_else(|| ServiceError::validation("Invalid meeting time"))?;

        validate_proposed_slots(slot_a, slot_b, now)?;
        validate_duration(request.proposed_duration_minutes)?;

        // One outstanding engagement per founder pair, in either direction
        if self
            .ctx
            .invite_repo()
            .has_active_between(inviter_id, request.invitee_id, now)
            .await?
        {
            return Err(DomainError::ActiveEngagementExists.into());
        }

        let window_start = now - Duration::hours(INVITE_WINDOW_HOURS);
        let sent_in_window = self
            .ctx
            .invite_repo()
            .count_created_since(inviter_id, window_start)
            .await?;
        if sent_in_window >= MAX_INVITES_PER_WINDOW {
            return Err(DomainError::InviteLimitReached.into());
        }

        let purpose = request.purpose_of_meeting.trim().to_string();
        let note = request
            .additional_note
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let invite = Invite::new(
            Uuid::new_v4(),
            inviter_id,
            request.invitee_id,
            purpose,
            note,
            slot_a,
            slot_b,
            request.proposed_duration_minutes,
        );

        self.ctx.invite_repo().create(&invite).await?;

        info!(
            invite_id = %invite.id,
            invitee_id = %invite.invitee_id,
            "Invite created"
        );

        // The invite must not exist without both parties notified: if either
        // dispatch fails, delete the record again before reporting failure.
        let notifications = NotificationService::new(self.ctx);
        if let Err(notify_err) = notifications
            .notify_created(&invite, &inviter, &invitee)
            .await
        {
            warn!(invite_id = %invite.id, "Notification failed, rolling back invite");
            if let Err(delete_err) = self.ctx.invite_repo().delete(invite.id).await {
                error!(
                    invite_id = %invite.id,
                    error = %delete_err,
                    "Compensating delete failed"
                );
            }
            return Err(notify_err);
        }

        Ok(())
    }

    /// Transition a pending invite to a terminal status on behalf of one of
    /// its parties.
    #[instrument(skip(self, request), fields(actor_id = %actor_id, invite_id = %invite_id))]
    pub async fn transition_status(
        &self,
        actor_id: Uuid,
        invite_id: Uuid,
        target: InviteStatus,
        request: TransitionInviteRequest,
    ) -> ServiceResult<InviteDetailsResponse> {
        if !target.is_terminal() {
            return Err(ServiceError::validation("Invalid invite status"));
        }

        // Accept needs its parameters before anything else is looked at
        let accept_params = if target == InviteStatus::Accepted {
            let slot_id = request
                .accepted_slot_id
                .ok_or(DomainError::MissingAcceptParams)?;
            let code = request
                .google_code
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .ok_or(DomainError::MissingAcceptParams)?
                .to_string();
            Some((slot_id, code))
        } else {
            None
        };

        let loaded = self.load_with_parties(invite_id).await?;
        let invite = &loaded.invite;

        if !invite.is_party(actor_id) {
            return Err(DomainError::NotInviteParty.into());
        }

        // Role matrix: inviter may only cancel, invitee may only respond
        if actor_id == invite.inviter_id
            && matches!(target, InviteStatus::Accepted | InviteStatus::Rejected)
        {
            return Err(DomainError::InviterCannotRespond.into());
        }
        if actor_id == invite.invitee_id && target == InviteStatus::Canceled {
            return Err(DomainError::InviteeCannotCancel.into());
        }

        let now = Utc::now();
        if invite.window_lapsed(now) {
            return Err(DomainError::MeetingWindowLapsed.into());
        }

        if invite.status == target || invite.is_terminal() {
            return Err(DomainError::AlreadyTransitioned(invite.status).into());
        }

        match accept_params {
            Some((slot_id, code)) => self.accept_invite(loaded, slot_id, &code, now).await,
            None => self.decline_invite(loaded, target).await,
        }
    }

    /// Load the projected invite shape
    #[instrument(skip(self))]
    pub async fn get_invite_details(&self, invite_id: Uuid) -> ServiceResult<InviteDetailsResponse> {
        let loaded = self.load_with_parties(invite_id).await?;
        Ok(InviteDetailsResponse::from(loaded))
    }

    /// Cancel or reject: notify the counter-party first, then persist.
    /// A dispatch failure aborts with the invite untouched.
    async fn decline_invite(
        &self,
        loaded: InviteWithParties,
        target: InviteStatus,
    ) -> ServiceResult<InviteDetailsResponse> {
        let notifications = NotificationService::new(self.ctx);
        match target {
            InviteStatus::Canceled => {
                notifications
                    .notify_canceled(&loaded.invite, &loaded.inviter, &loaded.invitee)
                    .await?;
            }
            InviteStatus::Rejected => {
                notifications
                    .notify_rejected(&loaded.invite, &loaded.inviter, &loaded.invitee)
                    .await?;
            }
            _ => return Err(ServiceError::internal("unexpected decline target")),
        }

        let updated = self
            .ctx
            .invite_repo()
            .transition_from_pending(loaded.invite.id, target)
            .await?;

        let Some(updated) = updated else {
            return Err(self.already_transitioned(loaded.invite.id).await);
        };

        info!(invite_id = %updated.id, status = %updated.status, "Invite transitioned");

        Ok(InviteDetailsResponse::from(InviteWithParties {
            invite: updated,
            ..loaded
        }))
    }

    /// Accept: guard the chosen slot, schedule the external meeting, notify
    /// both parties, then persist the acceptance.
    ///
    /// If scheduling succeeds but a notification then fails, the transition
    /// aborts with no state mutation even though the calendar event already
    /// exists. That inconsistency window is accepted behavior.
    async fn accept_invite(
        &self,
        loaded: InviteWithParties,
        slot_id: SlotId,
        auth_code: &str,
        now: chrono::DateTime<Utc>,
    ) -> ServiceResult<InviteDetailsResponse> {
        let chosen = loaded.invite.slot(slot_id);
        if chosen.starts_at < now {
            return Err(DomainError::AcceptedSlotInPast.into());
        }

        let scheduling = SchedulingService::new(self.ctx);
        let scheduled = scheduling
            .schedule_meeting(
                &loaded.inviter,
                &loaded.invitee,
                chosen.starts_at,
                loaded.invite.duration_minutes,
                auth_code,
            )
            .await?;

        let notifications = NotificationService::new(self.ctx);
        notifications
            .notify_accepted(&loaded.invite, &loaded.inviter, &loaded.invitee)
            .await?;

        let updated = self
            .ctx
            .invite_repo()
            .record_acceptance(
                loaded.invite.id,
                slot_id,
                &scheduled.meeting_link,
                scheduled.window,
            )
            .await?;

        let Some(updated) = updated else {
            return Err(self.already_transitioned(loaded.invite.id).await);
        };

        info!(
            invite_id = %updated.id,
            slot = %slot_id,
            "Invite accepted and meeting scheduled"
        );

        Ok(InviteDetailsResponse::from(InviteWithParties {
            invite: updated,
            ..loaded
        }))
    }

    /// Resolve the error for a conditional update that matched no row: the
    /// invite was either transitioned concurrently or deleted.
    async fn already_transitioned(&self, invite_id: Uuid) -> ServiceError {
        match self.ctx.invite_repo().find_by_id(invite_id).await {
            Ok(Some(current)) => DomainError::AlreadyTransitioned(current.status).into(),
            Ok(None) => ServiceError::not_found("Invite", invite_id.to_string()),
            Err(e) => e.into(),
        }
    }

    async fn load_with_parties(&self, invite_id: Uuid) -> ServiceResult<InviteWithParties> {
        let invite = self
            .ctx
            .invite_repo()
            .find_by_id(invite_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Invite", invite_id.to_string()))?;

        let inviter = self
            .ctx
            .founder_repo()
            .find_by_id(invite.inviter_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Invite inviter not found"))?;
        let invitee = self
            .ctx
            .founder_repo()
            .find_by_id(invite.invitee_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Invite invitee not found"))?;

        let inviter_startup = self
            .ctx
            .startup_repo()
            .find_by_id(inviter.startup_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Inviter startup not found"))?;
        let invitee_startup = self
            .ctx
            .startup_repo()
            .find_by_id(invitee.startup_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Invitee startup not found"))?;

        Ok(InviteWithParties {
            invite,
            inviter,
            inviter_startup,
            invitee,
            invitee_startup,
        })
    }
}
