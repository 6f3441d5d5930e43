// ============================================================================
// Forum Core - Session Manager
// File: crates/forum-core/src/services/session_service.rs
// ============================================================================
//! Session lifecycle: authenticate, create, resolve and revoke tokens.
//!
//! A token moves `Unborn -> Active -> {Expired, Revoked}`. Expiry is only
//! observed when a token is resolved; there is no background sweep. Callers
//! cannot tell an expired token from a revoked or unknown one.

use std::sync::Arc;

use chrono::Duration;
use forum_security::{generate_session_token, PasswordService};
use forum_shared::constants::SESSION_TOKEN_ATTEMPTS;
use forum_shared::utils::{mask_email, mask_token};
use forum_shared::UserId;
use tracing::{debug, error, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::domain::{Identity, Session, User};
use crate::error::DomainError;
use crate::repositories::{SessionRepository, UserRepository};

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub identity: Identity,
    pub session: Session,
}

enum TokenState {
    Missing,
    Expired,
    Active(UserId),
}

pub struct SessionManager<S: SessionRepository, U: UserRepository> {
    session_repo: Arc<S>,
    user_repo: Arc<U>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl<S: SessionRepository, U: UserRepository> SessionManager<S, U> {
    pub fn new(session_repo: Arc<S>, user_repo: Arc<U>, ttl_hours: i64) -> Self {
        Self::with_clock(session_repo, user_repo, ttl_hours, Arc::new(SystemClock))
    }

    pub fn with_clock(
        session_repo: Arc<S>,
        user_repo: Arc<U>,
        ttl_hours: i64,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            session_repo,
            user_repo,
            clock,
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Verify an email/password pair. An unknown email and a wrong password
    /// both produce `InvalidCredentials`.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("Login failed: no account for {}", mask_email(email));
                return Err(DomainError::InvalidCredentials);
            }
        };

        if !PasswordService::verify(password, &user.password_hash) {
            warn!("Login failed: password mismatch for user {}", user.id);
            return Err(DomainError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Persist a new session for `user_id`. Existing sessions of the same
    /// user stay valid.
    pub async fn create_session(&self, user_id: UserId) -> Result<Session, DomainError> {
        for attempt in 1..=SESSION_TOKEN_ATTEMPTS {
            let session = Session::issue(generate_session_token(), user_id, self.clock.now(), self.ttl);

            match self.session_repo.create(&session).await {
                Ok(()) => {
                    info!("Session created for user {} (expires {})", user_id, session.expires_at);
                    return Ok(session);
                }
                Err(DomainError::SessionTokenConflict) => {
                    warn!("Session token collision for user {} on attempt {}", user_id, attempt);
                }
                Err(e) => {
                    error!("Failed to create session for user {}: {}", user_id, e);
                    return Err(e);
                }
            }
        }

        error!("Gave up creating session for user {} after {} collisions", user_id, SESSION_TOKEN_ATTEMPTS);
        Err(DomainError::SessionTokenConflict)
    }

    /// Authenticate, then open a session.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        let user = self.authenticate(email, password).await?;
        let session = self.create_session(user.id).await?;

        info!("Login successful for {}", mask_email(email));

        Ok(LoginResult {
            identity: Identity::from(&user),
            session,
        })
    }

    /// Map a token to the identity it belongs to. `Ok(None)` means "not
    /// logged in"; storage errors are returned, never treated as anonymous.
    pub async fn resolve(&self, token: &str) -> Result<Option<Identity>, DomainError> {
        if token.is_empty() {
            return Ok(None);
        }

        let user_id = match self.lookup(token).await? {
            TokenState::Missing => return Ok(None),
            TokenState::Expired => {
                self.discard_expired(token).await;
                return Ok(None);
            }
            TokenState::Active(user_id) => user_id,
        };

        let user = self.user_repo.find_by_id(user_id).await?;
        if user.is_none() {
            debug!("Session {} points at missing user {}", mask_token(token), user_id);
        }

        Ok(user.as_ref().map(Identity::from))
    }

    /// Delete the session. Never fails: the caller clears the cookie either way.
    pub async fn revoke(&self, token: &str) {
        if token.is_empty() {
            return;
        }

        match self.session_repo.delete(token).await {
            Ok(()) => info!("Session {} revoked", mask_token(token)),
            Err(e) => error!("Failed to delete session {} on logout: {}", mask_token(token), e),
        }
    }

    async fn lookup(&self, token: &str) -> Result<TokenState, DomainError> {
        let session = match self.session_repo.find_by_token(token).await? {
            Some(session) => session,
            None => return Ok(TokenState::Missing),
        };

        if session.is_expired_at(self.clock.now()) {
            debug!("Session {} expired at {}", mask_token(token), session.expires_at);
            return Ok(TokenState::Expired);
        }

        Ok(TokenState::Active(session.user_id))
    }

    async fn discard_expired(&self, token: &str) {
        if let Err(e) = self.session_repo.delete(token).await {
            warn!("Error deleting expired session {}: {}", mask_token(token), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::repositories::{MockSessionRepository, MockUserRepository};
    use chrono::{DateTime, Utc};
    use mockall::predicate::eq;

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn user(id: UserId, password: &str) -> User {
        User {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            password_hash: PasswordService::hash(password).unwrap(),
            created_at: start(),
        }
    }

    fn manager(
        sessions: MockSessionRepository,
        users: MockUserRepository,
        clock: Arc<ManualClock>,
    ) -> SessionManager<MockSessionRepository, MockUserRepository> {
        SessionManager::with_clock(Arc::new(sessions), Arc::new(users), 24, clock)
    }

    #[tokio::test]
    async fn test_authenticate_hides_which_field_was_wrong() {
        let mut users = MockUserRepository::new();
        let known = user(1, "right password");
        users
            .expect_find_by_email()
            .returning(move |email| Ok((email == "user1@example.com").then(|| known.clone())));

        let mgr = manager(MockSessionRepository::new(), users, Arc::new(ManualClock::new(start())));

        let unknown = mgr.authenticate("ghost@example.com", "right password").await;
        let mismatch = mgr.authenticate("user1@example.com", "wrong password").await;
        assert!(matches!(unknown, Err(DomainError::InvalidCredentials)));
        assert!(matches!(mismatch, Err(DomainError::InvalidCredentials)));
        assert_eq!(unknown.unwrap_err().to_string(), mismatch.unwrap_err().to_string());

        let ok = mgr.authenticate("user1@example.com", "right password").await.unwrap();
        assert_eq!(ok.id, 1);
    }

    #[tokio::test]
    async fn test_create_session_sets_ttl_and_retries_collisions() {
        let mut sessions = MockSessionRepository::new();
        let mut calls = 0;
        sessions.expect_create().times(2).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(DomainError::SessionTokenConflict)
            } else {
                Ok(())
            }
        });

        let mgr = manager(sessions, MockUserRepository::new(), Arc::new(ManualClock::new(start())));
        let session = mgr.create_session(5).await.unwrap();

        assert_eq!(session.user_id, 5);
        assert_eq!(session.created_at, start());
        assert_eq!(session.expires_at, start() + Duration::hours(24));
        assert_eq!(session.token.len(), 64);
    }

    #[tokio::test]
    async fn test_create_session_propagates_storage_failure() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_create()
            .times(1)
            .returning(|_| Err(DomainError::PersistenceFailure("disk full".into())));

        let mgr = manager(sessions, MockUserRepository::new(), Arc::new(ManualClock::new(start())));
        assert!(matches!(mgr.create_session(5).await, Err(DomainError::PersistenceFailure(_))));
    }

    #[tokio::test]
    async fn test_resolve_unknown_and_empty_tokens_are_anonymous() {
        let mut sessions = MockSessionRepository::new();
        sessions.expect_find_by_token().times(1).returning(|_| Ok(None));

        let mgr = manager(sessions, MockUserRepository::new(), Arc::new(ManualClock::new(start())));
        assert_eq!(mgr.resolve("").await.unwrap(), None);
        assert_eq!(mgr.resolve("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_resolve_expiry_is_monotonic_and_lazy() {
        let clock = Arc::new(ManualClock::new(start()));
        let session = Session::issue("tok".to_string(), 1, start(), Duration::hours(24));

        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token()
            .with(eq("tok"))
            .returning(move |_| Ok(Some(session.clone())));
        sessions.expect_delete().with(eq("tok")).times(2).returning(|_| Ok(()));

        let mut users = MockUserRepository::new();
        let owner = user(1, "pw-irrelevant");
        users
            .expect_find_by_id()
            .with(eq(1))
            .returning(move |_| Ok(Some(owner.clone())));

        let mgr = manager(sessions, users, clock.clone());

        for _ in 0..3 {
            assert_eq!(mgr.resolve("tok").await.unwrap().map(|i| i.id), Some(1));
        }
        clock.advance(Duration::hours(23) + Duration::minutes(59));
        assert!(mgr.resolve("tok").await.unwrap().is_some());

        clock.set(start() + Duration::hours(24) + Duration::minutes(1));
        assert_eq!(mgr.resolve("tok").await.unwrap(), None);
        assert_eq!(mgr.resolve("tok").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_resolve_swallows_expired_cleanup_failure() {
        let clock = Arc::new(ManualClock::new(start() + Duration::days(2)));
        let session = Session::issue("old".to_string(), 1, start(), Duration::hours(24));

        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token()
            .returning(move |_| Ok(Some(session.clone())));
        sessions
            .expect_delete()
            .times(1)
            .returning(|_| Err(DomainError::PersistenceFailure("locked".into())));

        let mgr = manager(sessions, MockUserRepository::new(), clock);
        assert_eq!(mgr.resolve("old").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_resolve_propagates_storage_failure() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token()
            .returning(|_| Err(DomainError::PersistenceFailure("io".into())));

        let mgr = manager(sessions, MockUserRepository::new(), Arc::new(ManualClock::new(start())));
        assert!(matches!(mgr.resolve("tok").await, Err(DomainError::PersistenceFailure(_))));
    }

    #[tokio::test]
    async fn test_resolve_deleted_user_is_anonymous() {
        let session = Session::issue("tok".to_string(), 9, start(), Duration::hours(24));
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_by_token()
            .returning(move |_| Ok(Some(session.clone())));
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().with(eq(9)).returning(|_| Ok(None));

        let mgr = manager(sessions, users, Arc::new(ManualClock::new(start())));
        assert_eq!(mgr.resolve("tok").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_revoke_never_fails() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_delete()
            .times(1)
            .returning(|_| Err(DomainError::PersistenceFailure("io".into())));

        let mgr = manager(sessions, MockUserRepository::new(), Arc::new(ManualClock::new(start())));
        mgr.revoke("tok").await;
        mgr.revoke("").await;
    }

    #[tokio::test]
    async fn test_login_returns_identity_and_session() {
        let mut users = MockUserRepository::new();
        let known = user(3, "s3cret-pass");
        users.expect_find_by_email().returning(move |_| Ok(Some(known.clone())));
        let mut sessions = MockSessionRepository::new();
        sessions.expect_create().times(1).returning(|_| Ok(()));

        let mgr = manager(sessions, users, Arc::new(ManualClock::new(start())));
        let result = mgr.login("user3@example.com", "s3cret-pass").await.unwrap();

        assert_eq!(result.identity.id, 3);
        assert_eq!(result.identity.username, "user3");
        assert_eq!(result.session.user_id, 3);
    }
}
