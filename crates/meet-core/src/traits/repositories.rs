//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Founder and startup storage is maintained by
//! a separate onboarding system, so only the read side is modeled here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Founder, Invite, InviteStatus, MeetingWindow, SlotId, Startup};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Founder Repository
// ============================================================================

#[async_trait]
pub trait FounderRepository: Send + Sync {
    /// Find founder by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Founder>>;
}

// ============================================================================
// Startup Repository
// ============================================================================

#[async_trait]
pub trait StartupRepository: Send + Sync {
    /// Find startup by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Startup>>;
}

// ============================================================================
// Invite Repository
// ============================================================================

#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Find invite by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Invite>>;

    /// Persist a new invite
    async fn create(&self, invite: &Invite) -> RepoResult<()>;

    /// Hard-delete an invite (compensating rollback during creation)
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Check whether an active engagement exists between two founders, in
    /// either inviter/invitee direction: status pending or accepted with at
    /// least one proposed slot at or after `now`
    async fn has_active_between(
        &self,
        party_a: Uuid,
        party_b: Uuid,
        now: DateTime<Utc>,
    ) -> RepoResult<bool>;

    /// Count invites a founder created at or after `since` (rolling
    /// rate-limit window)
    async fn count_created_since(&self, inviter_id: Uuid, since: DateTime<Utc>)
        -> RepoResult<i64>;

    /// Atomically move a pending invite to `target`.
    ///
    /// The update is conditional on the stored status still being `pending`,
    /// which doubles as the concurrency guard: a `None` result means the
    /// invite is gone or was transitioned by a concurrent call.
    async fn transition_from_pending(
        &self,
        id: Uuid,
        target: InviteStatus,
    ) -> RepoResult<Option<Invite>>;

    /// Atomically move a pending invite to `accepted`, recording the chosen
    /// slot and the scheduling result. Same conditional-update semantics as
    /// [`transition_from_pending`](Self::transition_from_pending).
    async fn record_acceptance(
        &self,
        id: Uuid,
        slot_id: SlotId,
        meeting_link: &str,
        window: MeetingWindow,
    ) -> RepoResult<Option<Invite>>;
}
