// ============================================================================
// Forum Core - Vote Ledger
// File: crates/forum-core/src/services/vote_service.rs
// ============================================================================
//! One signed vote per (voter, target) with insert / toggle-off / switch policy.

use std::sync::Arc;

use forum_shared::{PostId, UserId};
use tracing::{error, info};

use crate::domain::{TargetRef, VoteOutcome, VoteValue};
use crate::error::DomainError;
use crate::repositories::VoteRepository;

pub struct VoteLedger<R: VoteRepository> {
    vote_repo: Arc<R>,
}

impl<R: VoteRepository> VoteLedger<R> {
    pub fn new(vote_repo: Arc<R>) -> Self {
        Self { vote_repo }
    }

    /// Validate raw request fields, then apply the vote.
    pub async fn apply_vote(
        &self,
        voter: UserId,
        target_kind: &str,
        target_id: i64,
        value: i64,
    ) -> Result<VoteOutcome, DomainError> {
        let value = VoteValue::try_from(value)?;
        let target = TargetRef::parse(target_kind, target_id)?;
        self.apply(voter, target, value).await
    }

    /// Apply an already validated vote. Whether the target exists is the
    /// caller's concern.
    pub async fn apply(
        &self,
        voter: UserId,
        target: TargetRef,
        value: VoteValue,
    ) -> Result<VoteOutcome, DomainError> {
        let outcome = self.vote_repo.apply(voter, target, value).await.map_err(|e| {
            error!("Failed to apply vote by user {} on {}: {}", voter, target, e);
            e
        })?;

        info!("Vote by user {} on {}: {}", voter, target, outcome.as_str());
        Ok(outcome)
    }

    pub async fn current_vote(
        &self,
        voter: UserId,
        target: TargetRef,
    ) -> Result<Option<VoteValue>, DomainError> {
        self.vote_repo.find(voter, target).await
    }

    pub async fn liked_posts(&self, voter: UserId) -> Result<Vec<PostId>, DomainError> {
        self.vote_repo.liked_post_ids(voter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockVoteRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_invalid_input_never_reaches_the_store() {
        let mut repo = MockVoteRepository::new();
        repo.expect_apply().never();
        let ledger = VoteLedger::new(Arc::new(repo));

        assert!(matches!(
            ledger.apply_vote(1, "post", 7, 0).await,
            Err(DomainError::InvalidVoteValue(0))
        ));
        assert!(matches!(
            ledger.apply_vote(1, "post", 7, 2).await,
            Err(DomainError::InvalidVoteValue(2))
        ));
        assert!(matches!(
            ledger.apply_vote(1, "thread", 7, 1).await,
            Err(DomainError::InvalidTarget(_))
        ));
        assert!(matches!(
            ledger.apply_vote(1, "comment", 0, -1).await,
            Err(DomainError::InvalidTarget(_))
        ));
    }

    #[tokio::test]
    async fn test_valid_vote_is_forwarded_as_tagged_target() {
        let mut repo = MockVoteRepository::new();
        repo.expect_apply()
            .with(eq(4), eq(TargetRef::Comment(12)), eq(VoteValue::Dislike))
            .times(1)
            .returning(|_, _, v| Ok(VoteOutcome::Applied(v)));
        let ledger = VoteLedger::new(Arc::new(repo));

        let outcome = ledger.apply_vote(4, "comment", 12, -1).await.unwrap();
        assert_eq!(outcome, VoteOutcome::Applied(VoteValue::Dislike));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut repo = MockVoteRepository::new();
        repo.expect_apply()
            .returning(|_, _, _| Err(DomainError::PersistenceFailure("busy".into())));
        let ledger = VoteLedger::new(Arc::new(repo));

        assert!(matches!(
            ledger.apply(1, TargetRef::Post(1), VoteValue::Like).await,
            Err(DomainError::PersistenceFailure(_))
        ));
    }
}
