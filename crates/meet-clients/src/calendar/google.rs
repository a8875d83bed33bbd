//! Google Calendar implementation of the MeetingScheduler port
//!
//! Exchanges the per-request OAuth authorization code for an access token,
//! inserts a calendar event with Meet conference data, and returns the
//! meeting link plus the confirmed window. Single attempt; any provider
//! error or malformed response surfaces as a scheduling failure.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use meet_core::entities::MeetingWindow;
use meet_core::error::DomainError;
use meet_core::traits::{MeetingScheduler, ScheduleRequest, ScheduledMeeting};

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const EVENTS_URL: &str = "https://www.googleapis.com/calendar/v3/calendars/primary/events";

/// Google Calendar implementation of the MeetingScheduler port
#[derive(Clone)]
pub struct GoogleCalendarClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl GoogleCalendarClient {
    /// Create a new client with a bounded per-request timeout
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            http,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        })
    }

    /// Exchange the authorization code for an access token
    async fn exchange_code(&self, code: &str) -> Result<String, DomainError> {
        let params = [
            ("code", code),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("redirect_uri", &self.redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| DomainError::Scheduling(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::Scheduling(format!(
                "token exchange returned {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Scheduling(e.to_string()))?;

        Ok(token.access_token)
    }
}

#[async_trait]
impl MeetingScheduler for GoogleCalendarClient {
    #[instrument(skip(self, request), fields(summary = %request.summary))]
    async fn schedule(&self, request: &ScheduleRequest) -> Result<ScheduledMeeting, DomainError> {
        let access_token = self.exchange_code(&request.auth_code).await?;

        let event = EventRequest {
            summary: &request.summary,
            location: "Google Meet",
            description: "Founder meeting scheduled via foundermeet",
            start: EventTime {
                date_time: request.starts_at,
            },
            end: EventTime {
                date_time: request.ends_at,
            },
            attendees: request
                .attendee_emails
                .iter()
                .map(|email| Attendee { email })
                .collect(),
            reminders: Reminders {
                use_default: false,
                overrides: vec![
                    ReminderOverride {
                        method: "email",
                        minutes: 60,
                    },
                    ReminderOverride {
                        method: "popup",
                        minutes: 10,
                    },
                ],
            },
            conference_data: ConferenceData {
                create_request: ConferenceCreateRequest {
                    request_id: conference_request_id(),
                },
            },
        };

        let response = self
            .http
            .post(EVENTS_URL)
            .query(&[("conferenceDataVersion", "1")])
            .bearer_auth(&access_token)
            .json(&event)
            .send()
            .await
            .map_err(|e| DomainError::Scheduling(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::Scheduling(format!(
                "event insert returned {}",
                response.status()
            )));
        }

        let created: EventResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Scheduling(e.to_string()))?;

        let meeting_link = created
            .hangout_link
            .ok_or_else(|| DomainError::Scheduling("response missing meeting link".to_string()))?;

        let start = created
            .start
            .and_then(|t| t.date_time)
            .ok_or_else(|| DomainError::Scheduling("response missing start time".to_string()))?;
        let end = created
            .end
            .and_then(|t| t.date_time)
            .ok_or_else(|| DomainError::Scheduling("response missing end time".to_string()))?;

        debug!(link = %meeting_link, "Calendar event created");

        Ok(ScheduledMeeting {
            meeting_link,
            window: MeetingWindow { start, end },
        })
    }
}

impl std::fmt::Debug for GoogleCalendarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleCalendarClient")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .finish_non_exhaustive()
    }
}

/// Random id for the Meet conference create request
fn conference_request_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventRequest<'a> {
    summary: &'a str,
    location: &'static str,
    description: &'static str,
    start: EventTime,
    end: EventTime,
    attendees: Vec<Attendee<'a>>,
    reminders: Reminders,
    conference_data: ConferenceData,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventTime {
    date_time: DateTime<Utc>,
}

#[derive(Serialize)]
struct Attendee<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Reminders {
    use_default: bool,
    overrides: Vec<ReminderOverride>,
}

#[derive(Serialize)]
struct ReminderOverride {
    method: &'static str,
    minutes: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceData {
    create_request: ConferenceCreateRequest,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceCreateRequest {
    request_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventResponse {
    hangout_link: Option<String>,
    start: Option<EventTimeResponse>,
    end: Option<EventTimeResponse>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventTimeResponse {
    date_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_request_id_shape() {
        let id1 = conference_request_id();
        let id2 = conference_request_id();
        assert_eq!(id1.len(), 16);
        assert!(id1.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_event_response_parses_provider_payload() {
        let payload = r#"{
            "hangoutLink": "https://meet.google.com/abc-defg-hij",
            "start": { "dateTime": "2026-08-10T10:00:00Z" },
            "end": { "dateTime": "2026-08-10T10:30:00Z" }
        }"#;
        let response: EventResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(
            response.hangout_link.as_deref(),
            Some("https://meet.google.com/abc-defg-hij")
        );
        assert!(response.start.unwrap().date_time.is_some());
        assert!(response.end.unwrap().date_time.is_some());
    }

    #[test]
    fn test_event_response_tolerates_missing_link() {
        let payload = r#"{ "start": {}, "end": {} }"#;
        let response: EventResponse = serde_json::from_str(payload).unwrap();
        assert!(response.hangout_link.is_none());
    }
}
