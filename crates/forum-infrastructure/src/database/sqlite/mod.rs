//! SQLite repository implementations

pub mod user_repo_impl;
pub mod session_repo_impl;
pub mod vote_repo_impl;

pub use user_repo_impl::SqliteUserRepository;
pub use session_repo_impl::SqliteSessionRepository;
pub use vote_repo_impl::SqliteVoteRepository;

use forum_core::error::DomainError;
use tracing::error;

/// Log a storage error with the operation and key it happened on, and turn
/// it into the domain's persistence failure.
pub(crate) fn persistence_failure(operation: &str, key: impl std::fmt::Display, e: sqlx::Error) -> DomainError {
    error!("Database error during {} ({}): {}", operation, key, e);
    DomainError::PersistenceFailure(format!("{} failed", operation))
}

pub(crate) fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
