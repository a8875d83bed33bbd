//! PostgreSQL implementation of InviteRepository
//!
//! The status transitions are single conditional UPDATEs guarded on
//! `status = 'pending'`, so the "already transitioned" check and the
//! concurrency guard are the same statement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use meet_core::entities::{Invite, InviteStatus, MeetingWindow, SlotId};
use meet_core::traits::{InviteRepository, RepoResult};

use crate::models::InviteModel;

use super::error::{invite_not_found, map_db_error};

/// PostgreSQL implementation of InviteRepository
#[derive(Clone)]
pub struct PgInviteRepository {
    pool: PgPool,
}

impl PgInviteRepository {
    /// Create a new PgInviteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Invite>> {
        let result = sqlx::query_as::<_, InviteModel>(
            r#"
            SELECT id, inviter_id, invitee_id, purpose_of_meeting, additional_note,
                   slot_a_starts_at, slot_b_starts_at, proposed_duration_minutes,
                   status, accepted_slot_id, meeting_link, meeting_window_start,
                   meeting_window_end, created_at, updated_at
            FROM invites
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Invite::try_from).transpose()
    }

    #[instrument(skip(self, invite))]
    async fn create(&self, invite: &Invite) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO invites (id, inviter_id, invitee_id, purpose_of_meeting,
                                additional_note, slot_a_starts_at, slot_b_starts_at,
                                proposed_duration_minutes, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(invite.id)
        .bind(invite.inviter_id)
        .bind(invite.invitee_id)
        .bind(&invite.purpose_of_meeting)
        .bind(&invite.additional_note)
        .bind(invite.slot_a.starts_at)
        .bind(invite.slot_b.starts_at)
        .bind(invite.duration_minutes)
        .bind(invite.status.as_str())
        .bind(invite.created_at)
        .bind(invite.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM invites WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(invite_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn has_active_between(
        &self,
        party_a: Uuid,
        party_b: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM invites
                WHERE ((inviter_id = $1 AND invitee_id = $2)
                    OR (inviter_id = $2 AND invitee_id = $1))
                  AND status IN ('pending', 'accepted')
                  AND (slot_a_starts_at >= $3 OR slot_b_starts_at >= $3)
            )
            "#,
        )
        .bind(party_a)
        .bind(party_b)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count_created_since(
        &self,
        inviter_id: Uuid,
        since: DateTime<Utc>,
    ) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM invites
            WHERE inviter_id = $1 AND created_at >= $2
            "#,
        )
        .bind(inviter_id)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn transition_from_pending(
        &self,
        id: Uuid,
        target: InviteStatus,
    ) -> RepoResult<Option<Invite>> {
        let result = sqlx::query_as::<_, InviteModel>(
            r#"
            UPDATE invites
            SET status = $2, updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING id, inviter_id, invitee_id, purpose_of_meeting, additional_note,
                      slot_a_starts_at, slot_b_starts_at, proposed_duration_minutes,
                      status, accepted_slot_id, meeting_link, meeting_window_start,
                      meeting_window_end, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(target.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Invite::try_from).transpose()
    }

    #[instrument(skip(self, meeting_link))]
    async fn record_acceptance(
        &self,
        id: Uuid,
        slot_id: SlotId,
        meeting_link: &str,
        window: MeetingWindow,
    ) -> RepoResult<Option<Invite>> {
        let result = sqlx::query_as::<_, InviteModel>(
            r#"
            UPDATE invites
            SET status = 'accepted', accepted_slot_id = $2, meeting_link = $3,
                meeting_window_start = $4, meeting_window_end = $5, updated_at = NOW()
            WHERE id = $1 AND status = 'pending'
            RETURNING id, inviter_id, invitee_id, purpose_of_meeting, additional_note,
                      slot_a_starts_at, slot_b_starts_at, proposed_duration_minutes,
                      status, accepted_slot_id, meeting_link, meeting_window_start,
                      meeting_window_end, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(slot_id.as_str())
        .bind(meeting_link)
        .bind(window.start)
        .bind(window.end)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Invite::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgInviteRepository>();
    }
}
