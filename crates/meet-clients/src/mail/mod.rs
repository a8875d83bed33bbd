//! Transactional mail delivery

mod sendgrid;

pub use sendgrid::SendGridMailer;
