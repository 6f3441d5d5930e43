//! # Forum Core - Domain Module
//! 
//! Domain entities for the forum.

pub mod user;
pub mod session;
pub mod vote;

pub use user::{Identity, NewUser, User};
pub use session::Session;
pub use vote::{TargetKind, TargetRef, VoteCounts, VoteOutcome, VoteTransition, VoteValue};
