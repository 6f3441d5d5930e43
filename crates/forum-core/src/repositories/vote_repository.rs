//! Vote repository trait (port)

use async_trait::async_trait;
use forum_shared::{PostId, UserId};

use crate::domain::{TargetRef, VoteCounts, VoteOutcome, VoteValue};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Runs the insert/toggle-off/switch decision for `(voter, target)` as one
    /// atomic unit: concurrent calls for the same key never both insert and
    /// a cancelled call leaves no partial write.
    async fn apply(
        &self,
        voter: UserId,
        target: TargetRef,
        value: VoteValue,
    ) -> Result<VoteOutcome, DomainError>;

    async fn find(&self, voter: UserId, target: TargetRef) -> Result<Option<VoteValue>, DomainError>;

    async fn count(&self, target: TargetRef) -> Result<VoteCounts, DomainError>;

    /// Posts the voter currently likes, most recent vote first.
    async fn liked_post_ids(&self, voter: UserId) -> Result<Vec<PostId>, DomainError>;
}
