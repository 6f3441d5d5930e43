//! # Forum Security
//! 
//! Security utilities: password hashing and session token generation.

pub mod password;
pub mod token;

pub use password::{PasswordError, PasswordService};
pub use token::generate_session_token;
