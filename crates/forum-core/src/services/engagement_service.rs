//! Like/dislike totals derived from the vote ledger

use std::sync::Arc;

use tracing::error;

use crate::domain::{TargetRef, VoteCounts};
use crate::error::DomainError;
use crate::repositories::VoteRepository;

/// Read-only view over the vote ledger. Holds no state of its own, so every
/// call reflects the ledger at read time.
pub struct EngagementAggregator<R: VoteRepository> {
    vote_repo: Arc<R>,
}

impl<R: VoteRepository> EngagementAggregator<R> {
    pub fn new(vote_repo: Arc<R>) -> Self {
        Self { vote_repo }
    }

    pub async fn count_votes(&self, target: TargetRef) -> Result<VoteCounts, DomainError> {
        self.vote_repo.count(target).await.map_err(|e| {
            error!("Failed to count votes on {}: {}", target, e);
            e
        })
    }
}
