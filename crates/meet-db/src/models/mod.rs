//! Database models with SQLx `FromRow` derives

mod founder;
mod invite;
mod startup;

pub use founder::FounderModel;
pub use invite::InviteModel;
pub use startup::StartupModel;
