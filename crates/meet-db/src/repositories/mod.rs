//! PostgreSQL repository implementations

mod error;
mod founder;
mod invite;
mod startup;

pub use founder::PgFounderRepository;
pub use invite::PgInviteRepository;
pub use startup::PgStartupRepository;
