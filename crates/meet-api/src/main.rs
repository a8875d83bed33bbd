//! Invite API server entry point
//!
//! Configuration comes from environment variables (with `.env` support):
//! ```bash
//! cargo run -p meet-api
//! ```

use meet_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = try_init_tracing(&TracingConfig::default()) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = meet_api::run(config).await {
        error!(error = %e, "Server exited with error");
        std::process::exit(1);
    }
}
