//! Password hashing with Argon2, with verification of legacy bcrypt hashes

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
}

pub struct PasswordService;

impl PasswordService {
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// Checks `password` against a stored hash. Both primitives compare in
    /// constant time; a stored hash that cannot be parsed never matches.
    pub fn verify(password: &str, hash: &str) -> bool {
        if Self::is_bcrypt(hash) {
            return bcrypt::verify(password, hash).unwrap_or(false);
        }

        match PasswordHash::new(hash) {
            Ok(parsed_hash) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }

    fn is_bcrypt(hash: &str) -> bool {
        ["$2a$", "$2b$", "$2y$"].iter().any(|prefix| hash.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = PasswordService::hash("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(PasswordService::verify("correct horse", &hash));
        assert!(!PasswordService::verify("wrong horse", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = PasswordService::hash("same password").unwrap();
        let b = PasswordService::hash("same password").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_legacy_bcrypt_hash_verifies() {
        let legacy = bcrypt::hash("hunter22", 4).unwrap();
        assert!(PasswordService::verify("hunter22", &legacy));
        assert!(!PasswordService::verify("hunter23", &legacy));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        assert!(!PasswordService::verify("anything", ""));
        assert!(!PasswordService::verify("anything", "plaintext"));
        assert!(!PasswordService::verify("anything", "$2b$garbage"));
    }
}
