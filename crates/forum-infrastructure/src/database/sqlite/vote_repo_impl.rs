// ============================================================================
// Forum Infrastructure - SQLite Vote Repository
// File: crates/forum-infrastructure/src/database/sqlite/vote_repo_impl.rs
// ============================================================================
//! `TargetRef` is flattened into the nullable `post_id` / `comment_id`
//! column pair here and nowhere else.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use forum_core::domain::{TargetRef, VoteCounts, VoteOutcome, VoteTransition, VoteValue};
use forum_core::error::DomainError;
use forum_core::repositories::VoteRepository;
use forum_core::{Clock, SystemClock};
use forum_shared::{PostId, UserId};

use super::persistence_failure;

/// Statements keyed on one target column.
struct TargetSql {
    select_value: &'static str,
    delete: &'static str,
    update: &'static str,
    count: &'static str,
}

const POST_SQL: TargetSql = TargetSql {
    select_value: "SELECT value FROM votes WHERE user_id = ? AND post_id = ?",
    delete: "DELETE FROM votes WHERE user_id = ? AND post_id = ?",
    update: "UPDATE votes SET value = ?, voted_at = ? WHERE user_id = ? AND post_id = ?",
    count: r#"
        SELECT COALESCE(SUM(CASE WHEN value = 1 THEN 1 ELSE 0 END), 0),
               COALESCE(SUM(CASE WHEN value = -1 THEN 1 ELSE 0 END), 0)
        FROM votes
        WHERE post_id = ?
    "#,
};

const COMMENT_SQL: TargetSql = TargetSql {
    select_value: "SELECT value FROM votes WHERE user_id = ? AND comment_id = ?",
    delete: "DELETE FROM votes WHERE user_id = ? AND comment_id = ?",
    update: "UPDATE votes SET value = ?, voted_at = ? WHERE user_id = ? AND comment_id = ?",
    count: r#"
        SELECT COALESCE(SUM(CASE WHEN value = 1 THEN 1 ELSE 0 END), 0),
               COALESCE(SUM(CASE WHEN value = -1 THEN 1 ELSE 0 END), 0)
        FROM votes
        WHERE comment_id = ?
    "#,
};

fn sql_for(target: TargetRef) -> &'static TargetSql {
    match target {
        TargetRef::Post(_) => &POST_SQL,
        TargetRef::Comment(_) => &COMMENT_SQL,
    }
}

pub struct SqliteVoteRepository {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteVoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_clock(pool, Arc::new(SystemClock))
    }

    /// `voted_at` is stamped from `clock`, which orders `liked_post_ids`.
    pub fn with_clock(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl VoteRepository for SqliteVoteRepository {
    async fn apply(
        &self,
        voter: UserId,
        target: TargetRef,
        value: VoteValue,
    ) -> Result<VoteOutcome, DomainError> {
        let sql = sql_for(target);
        let (post_id, comment_id) = target.columns();
        let now = self.clock.now();

        // Dropping `tx` before commit rolls back, so a cancelled call leaves
        // the previous vote in place.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| persistence_failure("begin vote transaction", target, e))?;

        // The insert goes first: it takes SQLite's write lock, so the read
        // below and the follow-up write see no interleaved writer. On an
        // existing row the unique index turns it into a no-op.
        let inserted = sqlx::query(
            r#"
            INSERT INTO votes (user_id, post_id, comment_id, value, voted_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(voter)
        .bind(post_id)
        .bind(comment_id)
        .bind(value.as_i64())
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| persistence_failure("insert vote", target, e))?
        .rows_affected()
            == 1;

        let existing = if inserted {
            None
        } else {
            let raw: i64 = sqlx::query_scalar(sql.select_value)
                .bind(voter)
                .bind(target.id())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| persistence_failure("read vote", target, e))?;
            Some(VoteValue::try_from(raw)?)
        };

        let transition = VoteTransition::decide(existing, value);
        match transition {
            VoteTransition::Insert => {}
            VoteTransition::Delete => {
                sqlx::query(sql.delete)
                    .bind(voter)
                    .bind(target.id())
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| persistence_failure("delete vote", target, e))?;
            }
            VoteTransition::Update => {
                sqlx::query(sql.update)
                    .bind(value.as_i64())
                    .bind(now)
                    .bind(voter)
                    .bind(target.id())
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| persistence_failure("update vote", target, e))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| persistence_failure("commit vote", target, e))?;

        debug!("Vote transition {:?} for user {} on {}", transition, voter, target);
        Ok(transition.outcome(value))
    }

    async fn find(&self, voter: UserId, target: TargetRef) -> Result<Option<VoteValue>, DomainError> {
        let raw: Option<i64> = sqlx::query_scalar(sql_for(target).select_value)
            .bind(voter)
            .bind(target.id())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| persistence_failure("find vote", target, e))?;

        raw.map(VoteValue::try_from).transpose()
    }

    async fn count(&self, target: TargetRef) -> Result<VoteCounts, DomainError> {
        let (likes, dislikes): (i64, i64) = sqlx::query_as(sql_for(target).count)
            .bind(target.id())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| persistence_failure("count votes", target, e))?;

        Ok(VoteCounts {
            likes: likes.max(0) as u64,
            dislikes: dislikes.max(0) as u64,
        })
    }

    async fn liked_post_ids(&self, voter: UserId) -> Result<Vec<PostId>, DomainError> {
        sqlx::query_scalar(
            r#"
            SELECT post_id FROM votes
            WHERE user_id = ? AND post_id IS NOT NULL AND value = 1
            ORDER BY voted_at DESC, id DESC
            "#,
        )
        .bind(voter)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| persistence_failure("list liked posts", voter, e))
    }
}
