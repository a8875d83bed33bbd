//! SendGrid implementation of the Mailer port
//!
//! Uses the v3 mail-send HTTP API. SendGrid acknowledges accepted messages
//! with 202; anything else is a delivery failure.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use meet_core::error::DomainError;
use meet_core::traits::{MailContext, MailTemplate, Mailer};

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid implementation of the Mailer port
#[derive(Clone)]
pub struct SendGridMailer {
    http: Client,
    api_key: String,
    from_email: String,
}

impl SendGridMailer {
    /// Create a new mailer with a bounded per-request timeout
    pub fn new(
        api_key: impl Into<String>,
        from_email: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            from_email: from_email.into(),
        })
    }
}

#[async_trait]
impl Mailer for SendGridMailer {
    #[instrument(skip(self, context), fields(template = ?template))]
    async fn send(
        &self,
        template: MailTemplate,
        context: &MailContext,
    ) -> Result<(), DomainError> {
        let (subject, html) = render(template, context);

        let body = SendRequest {
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: &context.recipient_email,
                }],
            }],
            from: Address {
                email: &self.from_email,
            },
            subject: &subject,
            content: vec![Content {
                content_type: "text/html",
                value: &html,
            }],
        };

        let response = self
            .http
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::MailDelivery(e.to_string()))?;

        if response.status().as_u16() != 202 {
            return Err(DomainError::MailDelivery(format!(
                "provider returned {}",
                response.status()
            )));
        }

        debug!(recipient = %context.recipient_email, "Mail accepted by provider");
        Ok(())
    }
}

impl std::fmt::Debug for SendGridMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridMailer")
            .field("from_email", &self.from_email)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'static str,
    value: &'a str,
}

/// Render one lifecycle message as (subject, html body)
fn render(template: MailTemplate, ctx: &MailContext) -> (String, String) {
    let inviter = &ctx.inviter_first_name;
    let invitee = &ctx.invitee_first_name;
    let link = &ctx.invite_link;

    match template {
        MailTemplate::InviteSentToInviter => (
            "Invite Sent!".to_string(),
            format!(
                "Hi {inviter},<br/><br/>\
                 This confirms the meeting invite you sent to <strong>{invitee}</strong>.<br/>\
                 Find the details <a href=\"{link}\">here</a>. You can cancel the invite from the same link.<br/>\
                 We will let you know by mail when {invitee} accepts or rejects your invite."
            ),
        ),
        MailTemplate::InviteReceivedToInvitee => (
            "Invite Received!".to_string(),
            format!(
                "Hi {invitee},<br/><br/>\
                 You have received a meeting invite from <strong>{inviter}</strong>.<br/>\
                 Find the details <a href=\"{link}\">here</a>. Please accept or reject the invite from the same link.<br/>\
                 We will let you know by mail if {inviter} cancels the invite."
            ),
        ),
        MailTemplate::InviteCanceledToInvitee => (
            "Invite Canceled".to_string(),
            format!(
                "Hi {invitee},<br/><br/>\
                 We regret to inform you that {inviter} has canceled the meeting invite.<br/>\
                 Find the details <a href=\"{link}\">here</a>."
            ),
        ),
        MailTemplate::InviteRejectedToInviter => (
            "Invite Rejected".to_string(),
            format!(
                "Hi {inviter},<br/><br/>\
                 We regret to inform you that {invitee} has rejected your meeting invite.<br/>\
                 Find the details <a href=\"{link}\">here</a>."
            ),
        ),
        MailTemplate::InviteAcceptedToInvitee => (
            "Invite Accepted!".to_string(),
            format!(
                "Hi {invitee},<br/><br/>\
                 Your meeting with {inviter} has been scheduled.<br/>\
                 Find the details <a href=\"{link}\">here</a>, or check your calendar for the meeting link."
            ),
        ),
        MailTemplate::InviteAcceptedToInviter => (
            "Invite Accepted!".to_string(),
            format!(
                "Hi {inviter},<br/><br/>\
                 Your meeting with {invitee} has been scheduled.<br/>\
                 Find the details <a href=\"{link}\">here</a>, or check your calendar for the meeting link."
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> MailContext {
        MailContext {
            recipient_email: "ada@example.com".to_string(),
            inviter_first_name: "Ada".to_string(),
            invitee_first_name: "Grace".to_string(),
            invite_link: "https://app.example.com/invite/abc?token=t".to_string(),
        }
    }

    #[test]
    fn test_each_template_embeds_the_link() {
        for template in [
            MailTemplate::InviteSentToInviter,
            MailTemplate::InviteReceivedToInvitee,
            MailTemplate::InviteCanceledToInvitee,
            MailTemplate::InviteRejectedToInviter,
            MailTemplate::InviteAcceptedToInvitee,
            MailTemplate::InviteAcceptedToInviter,
        ] {
            let (subject, html) = render(template, &context());
            assert!(!subject.is_empty());
            assert!(html.contains("https://app.example.com/invite/abc?token=t"));
        }
    }

    #[test]
    fn test_templates_address_the_right_recipient() {
        let (_, html) = render(MailTemplate::InviteReceivedToInvitee, &context());
        assert!(html.starts_with("Hi Grace"));

        let (_, html) = render(MailTemplate::InviteRejectedToInviter, &context());
        assert!(html.starts_with("Hi Ada"));
    }
}
