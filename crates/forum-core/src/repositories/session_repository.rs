//! Session repository trait (port)

use async_trait::async_trait;

use crate::domain::Session;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fails with `SessionTokenConflict` when the token is already stored.
    async fn create(&self, session: &Session) -> Result<(), DomainError>;
    async fn find_by_token(&self, token: &str) -> Result<Option<Session>, DomainError>;
    /// Deleting an unknown token succeeds.
    async fn delete(&self, token: &str) -> Result<(), DomainError>;
}
