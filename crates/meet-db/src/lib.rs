//! # meet-db
//!
//! Database layer implementing the repository traits with PostgreSQL via
//! SQLx: connection pool management, database models with `FromRow` derives,
//! entity mappers, and the repository implementations (including the
//! conflict/rate-limit queries and the atomic conditional status update).

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{PgFounderRepository, PgInviteRepository, PgStartupRepository};
