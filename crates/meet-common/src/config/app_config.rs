//! Application configuration structs
//!
//! Everything comes from environment variables, with `.env` support for
//! local development. Each section loads itself; a missing required
//! variable surfaces as a `ConfigError` naming it.

use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub sendgrid: SendGridConfig,
    pub google: GoogleConfig,
    pub outbound: OutboundConfig,
    /// Base URL invite-details links point at
    pub frontend_url: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or unparseable
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; real environments set variables directly
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings::from_env(),
            api: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            jwt: JwtConfig::from_env()?,
            rate_limit: RateLimitConfig::from_env(),
            cors: CorsConfig::from_env(),
            sendgrid: SendGridConfig::from_env()?,
            google: GoogleConfig::from_env()?,
            outbound: OutboundConfig::from_env(),
            frontend_url: require("FRONTEND_URL")?,
        })
    }
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

impl AppSettings {
    fn from_env() -> Self {
        Self {
            name: optional("APP_NAME").unwrap_or_else(|| "foundermeet".to_string()),
            // an unrecognized APP_ENV falls back to development
            env: optional("APP_ENV")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional("API_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: require_parsed("API_PORT")?,
        })
    }

    /// Bind address as `host:port`
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: require("DATABASE_URL")?,
            max_connections: parsed_or("DATABASE_MAX_CONNECTIONS", 20),
            min_connections: parsed_or("DATABASE_MIN_CONNECTIONS", 5),
        })
    }
}

/// JWT configuration for founder link/bearer tokens
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    pub token_expiry: i64,
}

impl JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            secret: require("JWT_SECRET")?,
            token_expiry: parsed_or("JWT_TOKEN_EXPIRY", 604_800),
        })
    }
}

/// Transport-level rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

impl RateLimitConfig {
    fn from_env() -> Self {
        Self {
            requests_per_second: parsed_or("RATE_LIMIT_REQUESTS_PER_SECOND", 10),
            burst: parsed_or("RATE_LIMIT_BURST", 50),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    fn from_env() -> Self {
        Self {
            allowed_origins: optional("CORS_ALLOWED_ORIGINS")
                .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                .unwrap_or_default(),
        }
    }
}

/// SendGrid mail delivery configuration
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    pub api_key: String,
    pub from_email: String,
}

impl SendGridConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: require("SENDGRID_API_KEY")?,
            from_email: require("SENDGRID_FROM_EMAIL")?,
        })
    }
}

/// Google Calendar scheduling configuration
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GoogleConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: require("GOOGLE_CLIENT_ID")?,
            client_secret: require("GOOGLE_CLIENT_SECRET")?,
            redirect_uri: require("GOOGLE_REDIRECT_URI")?,
        })
    }
}

/// Shared settings for outbound provider calls
#[derive(Debug, Clone)]
pub struct OutboundConfig {
    /// Bounded per-request timeout in seconds; a timeout counts as failure
    pub request_timeout_secs: u64,
}

impl OutboundConfig {
    fn from_env() -> Self {
        Self {
            request_timeout_secs: parsed_or("OUTBOUND_REQUEST_TIMEOUT_SECS", 10),
        }
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn optional(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn require_parsed<T: FromStr>(name: &'static str) -> Result<T, ConfigError> {
    let raw = require(name)?;
    raw.parse()
        .map_err(|_| ConfigError::InvalidValue(name, raw))
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!("production".parse::<Environment>().ok(), Some(Environment::Production));
        assert_eq!("Staging".parse::<Environment>().ok(), Some(Environment::Staging));
        assert!("sandbox".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_parsed_or_falls_back_on_garbage() {
        // variable unset
        assert_eq!(parsed_or("NO_SUCH_VARIABLE_SET", 42u32), 42);
    }
}
