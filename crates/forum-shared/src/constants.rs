//! Application-wide constants

pub const SESSION_COOKIE_NAME: &str = "session_id";
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;
pub const SESSION_TOKEN_BYTES: usize = 32;
pub const SESSION_TOKEN_ATTEMPTS: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
