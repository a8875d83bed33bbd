//! Notification dispatcher
//!
//! Maps each lifecycle event to exactly one templated message per recipient
//! and mints the recipient-scoped link token each message embeds. Delivery
//! itself goes through the Mailer port; a failed dispatch surfaces to the
//! caller, which decides whether to roll back or abort.

use tracing::{info, instrument};
use uuid::Uuid;

use meet_core::entities::{Founder, Invite};
use meet_core::traits::{MailContext, MailTemplate};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification dispatcher
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Invite created: invitee is told first, then the inviter gets the
    /// confirmation. The creation flow treats a failure of either as fatal.
    #[instrument(skip(self, invite, inviter, invitee), fields(invite_id = %invite.id))]
    pub async fn notify_created(
        &self,
        invite: &Invite,
        inviter: &Founder,
        invitee: &Founder,
    ) -> ServiceResult<()> {
        self.dispatch(
            MailTemplate::InviteReceivedToInvitee,
            invite,
            inviter,
            invitee,
            invitee,
        )
        .await?;
        self.dispatch(
            MailTemplate::InviteSentToInviter,
            invite,
            inviter,
            invitee,
            inviter,
        )
        .await?;
        Ok(())
    }

    /// Inviter canceled: the invitee is told
    #[instrument(skip(self, invite, inviter, invitee), fields(invite_id = %invite.id))]
    pub async fn notify_canceled(
        &self,
        invite: &Invite,
        inviter: &Founder,
        invitee: &Founder,
    ) -> ServiceResult<()> {
        self.dispatch(
            MailTemplate::InviteCanceledToInvitee,
            invite,
            inviter,
            invitee,
            invitee,
        )
        .await
    }

    /// Invitee rejected: the inviter is told
    #[instrument(skip(self, invite, inviter, invitee), fields(invite_id = %invite.id))]
    pub async fn notify_rejected(
        &self,
        invite: &Invite,
        inviter: &Founder,
        invitee: &Founder,
    ) -> ServiceResult<()> {
        self.dispatch(
            MailTemplate::InviteRejectedToInviter,
            invite,
            inviter,
            invitee,
            inviter,
        )
        .await
    }

    /// Meeting scheduled: both parties are told, invitee first
    #[instrument(skip(self, invite, inviter, invitee), fields(invite_id = %invite.id))]
    pub async fn notify_accepted(
        &self,
        invite: &Invite,
        inviter: &Founder,
        invitee: &Founder,
    ) -> ServiceResult<()> {
        self.dispatch(
            MailTemplate::InviteAcceptedToInvitee,
            invite,
            inviter,
            invitee,
            invitee,
        )
        .await?;
        self.dispatch(
            MailTemplate::InviteAcceptedToInviter,
            invite,
            inviter,
            invitee,
            inviter,
        )
        .await?;
        Ok(())
    }

    async fn dispatch(
        &self,
        template: MailTemplate,
        invite: &Invite,
        inviter: &Founder,
        invitee: &Founder,
        recipient: &Founder,
    ) -> ServiceResult<()> {
        let context = MailContext {
            recipient_email: recipient.email.clone(),
            inviter_first_name: inviter.first_name.clone(),
            invitee_first_name: invitee.first_name.clone(),
            invite_link: self.invite_link(invite.id, recipient.id)?,
        };

        self.ctx.mailer().send(template, &context).await?;

        info!(
            template = ?template,
            recipient = %recipient.id,
            "Notification dispatched"
        );
        Ok(())
    }

    /// Details link scoped to one recipient via a time-limited token
    fn invite_link(&self, invite_id: Uuid, recipient_id: Uuid) -> ServiceResult<String> {
        let token = self.ctx.jwt_service().issue_token(recipient_id)?;
        Ok(format!(
            "{}/invite/{}?token={}",
            self.ctx.frontend_url(),
            invite_id,
            token
        ))
    }
}
