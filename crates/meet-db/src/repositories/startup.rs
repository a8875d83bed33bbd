//! PostgreSQL implementation of StartupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use meet_core::entities::Startup;
use meet_core::traits::{RepoResult, StartupRepository};

use crate::models::StartupModel;

use super::error::map_db_error;

/// PostgreSQL implementation of StartupRepository
#[derive(Clone)]
pub struct PgStartupRepository {
    pool: PgPool,
}

impl PgStartupRepository {
    /// Create a new PgStartupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StartupRepository for PgStartupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Startup>> {
        let result = sqlx::query_as::<_, StartupModel>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM startups
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Startup::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgStartupRepository>();
    }
}
