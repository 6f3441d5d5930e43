// ============================================================================
// Forum Core - Account Service
// File: crates/forum-core/src/services/account_service.rs
// ============================================================================
//! User registration against the identity store

use std::sync::Arc;

use forum_security::PasswordService;
use forum_shared::constants::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use forum_shared::utils::mask_email;
use tracing::{info, warn};

use crate::domain::{NewUser, User};
use crate::error::DomainError;
use crate::repositories::UserRepository;

pub struct AccountService<R: UserRepository> {
    user_repo: Arc<R>,
}

impl<R: UserRepository> AccountService<R> {
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    /// Register a new user
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<User, DomainError> {
        info!("Registration attempt for email: {}", mask_email(email));

        // 1. Password policy, counted in characters
        let password_len = password.chars().count();
        if password_len < MIN_PASSWORD_LENGTH {
            return Err(DomainError::PasswordTooShort);
        }
        if password_len > MAX_PASSWORD_LENGTH {
            return Err(DomainError::PasswordTooLong);
        }

        // 2. Shape of email/username, before touching the store
        let candidate = NewUser::new(email.to_string(), username.to_string(), String::new())
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;

        // 3. Uniqueness; the store's unique indexes cover the race window
        if self.user_repo.find_by_email(&candidate.email).await?.is_some() {
            warn!("Registration failed: email already registered: {}", mask_email(email));
            return Err(DomainError::EmailAlreadyExists(candidate.email));
        }
        if self.user_repo.find_by_username(&candidate.username).await?.is_some() {
            warn!("Registration failed: username already taken: {}", candidate.username);
            return Err(DomainError::UsernameAlreadyExists(candidate.username));
        }

        // 4. Hash and store
        let password_hash = PasswordService::hash(password)
            .map_err(|e| DomainError::PasswordHashError(e.to_string()))?;
        let new_user = NewUser {
            password_hash,
            ..candidate
        };
        let created = self.user_repo.create(&new_user).await?;

        info!("Registration successful for user {}", created.id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockUserRepository;
    use chrono::Utc;

    fn stored(new_user: &NewUser) -> User {
        User {
            id: 42,
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_find_by_username().returning(|_| Ok(None));
        repo.expect_create()
            .withf(|u: &NewUser| u.password_hash.starts_with("$argon2") && u.username == "carol")
            .times(1)
            .returning(|u| Ok(stored(u)));

        let service = AccountService::new(Arc::new(repo));
        let user = service.register("carol@example.com", " carol ", "long enough").await.unwrap();

        assert_eq!(user.id, 42);
        assert!(PasswordService::verify("long enough", &user.password_hash));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok((email == "taken@example.com").then(|| User {
                id: 1,
                username: "someone".into(),
                email: email.to_string(),
                password_hash: String::new(),
                created_at: Utc::now(),
            })));
        repo.expect_find_by_username()
            .returning(|name| Ok((name == "dave").then(|| User {
                id: 2,
                username: name.to_string(),
                email: "dave@example.com".into(),
                password_hash: String::new(),
                created_at: Utc::now(),
            })));
        repo.expect_create().never();

        let service = AccountService::new(Arc::new(repo));
        assert!(matches!(
            service.register("taken@example.com", "newname", "password123").await,
            Err(DomainError::EmailAlreadyExists(_))
        ));
        assert!(matches!(
            service.register("fresh@example.com", "dave", "password123").await,
            Err(DomainError::UsernameAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_register_validates_before_lookup() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();
        let service = AccountService::new(Arc::new(repo));

        assert!(matches!(
            service.register("a@example.com", "alice", "short").await,
            Err(DomainError::PasswordTooShort)
        ));
        assert!(matches!(
            service.register("a@example.com", "alice", &"x".repeat(129)).await,
            Err(DomainError::PasswordTooLong)
        ));
        assert!(matches!(
            service.register("nope", "alice", "password123").await,
            Err(DomainError::ValidationError(_))
        ));
    }
}
