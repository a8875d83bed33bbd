//! Tracing and logging setup
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to the
//! whole tree. Production gets JSON lines, development the pretty format
//! with file/line locations.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Log level filter used when `RUST_LOG` is unset
    pub level: Level,
    /// Enable JSON output format
    pub json: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json: false,
        }
    }
}

impl TracingConfig {
    /// Production configuration with JSON logging
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: Level::INFO,
            json: true,
        }
    }
}

/// Try to initialize the global tracing subscriber.
///
/// Fails when a subscriber is already installed, which happens in tests and
/// embedded use; callers that can tolerate that should use this over
/// [`init_tracing`].
pub fn try_init_tracing(config: &TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.with_file(true).with_line_number(true).try_init()
    };

    result.map_err(|_| TracingError::AlreadyInitialized)
}

/// Initialize the global tracing subscriber
///
/// # Panics
/// Panics if a subscriber is already set
pub fn init_tracing(config: &TracingConfig) {
    if let Err(e) = try_init_tracing(config) {
        panic!("{e}");
    }
}

/// Tracing initialization errors
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.json);
    }

    #[test]
    fn test_production_config() {
        let config = TracingConfig::production();
        assert_eq!(config.level, Level::INFO);
        assert!(config.json);
    }

    // the init functions are not unit-testable: the global subscriber can
    // only be set once per process
}
