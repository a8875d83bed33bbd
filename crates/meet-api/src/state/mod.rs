//! Application state
//!
//! One cloneable handle shared by every handler: the service context with
//! all injected dependencies, the raw database pool (readiness checks go
//! straight to it), and the loaded configuration.

use std::sync::Arc;

use meet_common::{AppConfig, JwtService};
use meet_db::PgPool;
use meet_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    db_pool: PgPool,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, db_pool: PgPool, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            db_pool,
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Pool handle for readiness checks
    pub fn db_pool(&self) -> &PgPool {
        &self.db_pool
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config.app.name)
            .finish_non_exhaustive()
    }
}
