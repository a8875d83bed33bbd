//! # meet-common
//!
//! Shared utilities including configuration, error handling, link tokens,
//! and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, JwtService};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, GoogleConfig,
    JwtConfig, OutboundConfig, RateLimitConfig, SendGridConfig, ServerConfig,
};
pub use error::AppError;
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
