//! Domain services (business logic)

pub mod account_service;
pub mod session_service;
pub mod vote_service;
pub mod engagement_service;

pub use account_service::AccountService;
pub use session_service::{LoginResult, SessionManager};
pub use vote_service::VoteLedger;
pub use engagement_service::EngagementAggregator;
