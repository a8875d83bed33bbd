//! PostgreSQL implementation of FounderRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use meet_core::entities::Founder;
use meet_core::traits::{FounderRepository, RepoResult};

use crate::models::FounderModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FounderRepository
#[derive(Clone)]
pub struct PgFounderRepository {
    pool: PgPool,
}

impl PgFounderRepository {
    /// Create a new PgFounderRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FounderRepository for PgFounderRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Founder>> {
        let result = sqlx::query_as::<_, FounderModel>(
            r#"
            SELECT id, first_name, last_name, email, startup_id, profile_complete,
                   created_at, updated_at
            FROM founders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Founder::from))
    }
}
