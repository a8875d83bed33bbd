//! Calendar scheduling

mod google;

pub use google::GoogleCalendarClient;
