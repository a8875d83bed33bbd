//! Server setup and initialization
//!
//! Builds the router and wires every dependency exactly once at startup.
//! The outbound mail and calendar clients are constructed here and injected
//! through the service context; nothing downstream reaches for
//! process-global state.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use meet_clients::{GoogleCalendarClient, SendGridMailer};
use meet_common::{AppConfig, AppError, JwtService};
use meet_db::{create_pool, PgFounderRepository, PgInviteRepository, PgStartupRepository};
use meet_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router().merge(health_routes());
    let router = apply_middleware(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    router.with_state(state.clone())
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&meet_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..meet_db::DatabaseConfig::default()
    })
    .await
    .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Outbound clients are built once for the process lifetime, each with
    // the bounded per-request timeout
    let timeout = Duration::from_secs(config.outbound.request_timeout_secs);
    let mailer = SendGridMailer::new(
        config.sendgrid.api_key.clone(),
        config.sendgrid.from_email.clone(),
        timeout,
    )
    .map_err(|e| AppError::Config(e.to_string()))?;
    let scheduler = GoogleCalendarClient::new(
        config.google.client_id.clone(),
        config.google.client_secret.clone(),
        config.google.redirect_uri.clone(),
        timeout,
    )
    .map_err(|e| AppError::Config(e.to_string()))?;

    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    let service_context = ServiceContextBuilder::new()
        .founder_repo(Arc::new(PgFounderRepository::new(pool.clone())))
        .startup_repo(Arc::new(PgStartupRepository::new(pool.clone())))
        .invite_repo(Arc::new(PgInviteRepository::new(pool.clone())))
        .mailer(Arc::new(mailer))
        .scheduler(Arc::new(scheduler))
        .jwt_service(jwt_service)
        .frontend_url(config.frontend_url.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server on the given bind address
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let state = create_app_state(config).await?;
    let app = create_app(state);
    run_server(app, &addr).await
}
