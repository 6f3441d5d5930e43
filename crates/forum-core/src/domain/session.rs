//! Session domain entity

use chrono::{DateTime, Duration, Utc};
use forum_shared::UserId;

/// A login session keyed by an opaque token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn issue(token: String, user_id: UserId, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            token,
            user_id,
            expires_at: now + ttl,
            created_at: now,
        }
    }

    /// A session stays valid up to and including its expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let session = Session::issue("t".to_string(), 1, now, Duration::hours(24));

        assert!(!session.is_expired_at(now));
        assert!(!session.is_expired_at(now + Duration::hours(24)));
        assert!(session.is_expired_at(now + Duration::hours(24) + Duration::milliseconds(1)));
    }
}
