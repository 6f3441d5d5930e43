//! Domain errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Password too short")]
    PasswordTooShort,

    #[error("Password too long")]
    PasswordTooLong,

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Session token already in use")]
    SessionTokenConflict,

    #[error("Invalid vote value: {0}")]
    InvalidVoteValue(i64),

    #[error("Invalid vote target: {0}")]
    InvalidTarget(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),
}
