//! # meet-clients
//!
//! Outbound adapters for the two external collaborators: transactional mail
//! via SendGrid and meeting creation via Google Calendar. Both are built on
//! `reqwest` clients with a bounded per-request timeout and are constructed
//! once at process start, then injected through the service context.

pub mod calendar;
pub mod mail;

pub use calendar::GoogleCalendarClient;
pub use mail::SendGridMailer;
