//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, GoogleConfig,
    JwtConfig, OutboundConfig, RateLimitConfig, SendGridConfig, ServerConfig,
};
