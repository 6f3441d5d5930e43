//! Repository traits (ports)

pub mod user_repository;
pub mod session_repository;
pub mod vote_repository;

pub use user_repository::UserRepository;
pub use session_repository::SessionRepository;
pub use vote_repository::VoteRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use vote_repository::MockVoteRepository;
