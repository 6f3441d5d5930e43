//! # Forum Core
//! 
//! Domain entities, services, and repository traits for the forum: the
//! session lifecycle and the vote ledger.

pub mod clock;
pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::*;
pub use error::DomainError;
