// ============================================================================
// Forum Core - User Entity
// File: crates/forum-core/src/domain/user.rs
// Description: Identity store records referenced by sessions and votes
// ============================================================================

use chrono::{DateTime, Utc};
use forum_shared::UserId;
use serde::Serialize;
use validator::Validate;

/// Registered user as stored in the identity store
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User not yet persisted; the store assigns the id
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(email(message = "Invalid email address"))]
    #[validate(length(max = 254, message = "Email too long"))]
    pub email: String,

    #[validate(length(min = 1, max = 32, message = "Username must be between 1 and 32 characters"))]
    pub username: String,

    pub password_hash: String,
}

impl NewUser {
    /// Build and validate a registration record. The email is kept
    /// byte-for-byte (login matches it exactly); the username is trimmed.
    pub fn new(
        email: String,
        username: String,
        password_hash: String,
    ) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            email: email.trim().to_string(),
            username: username.trim().to_string(),
            password_hash,
        };

        user.validate()?;
        Ok(user)
    }
}

/// Authenticated identity handed to request handlers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: UserId,
    pub username: String,
    pub email: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_trims_and_validates() {
        let user = NewUser::new(
            " alice@example.com ".to_string(),
            "  alice ".to_string(),
            "hash".to_string(),
        )
        .unwrap();
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_new_user_rejects_bad_email() {
        let result = NewUser::new("not-an-email".to_string(), "bob".to_string(), "hash".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_new_user_rejects_blank_or_long_username() {
        assert!(NewUser::new("b@example.com".to_string(), "   ".to_string(), "h".to_string()).is_err());
        assert!(NewUser::new("b@example.com".to_string(), "x".repeat(33), "h".to_string()).is_err());
    }
}
