//! User repository trait (port)

use async_trait::async_trait;
use forum_shared::UserId;

use crate::domain::{NewUser, User};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;
    /// Exact, case-sensitive match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
    /// Fails with `EmailAlreadyExists` / `UsernameAlreadyExists` on a unique violation.
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
