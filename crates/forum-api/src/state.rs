use std::sync::Arc;

use forum_core::services::{AccountService, EngagementAggregator, SessionManager, VoteLedger};
use forum_core::{Clock, SystemClock};
use forum_infrastructure::{SqliteSessionRepository, SqliteUserRepository, SqliteVoteRepository};
use forum_shared::config::SessionSettings;
use sqlx::SqlitePool;

pub type Sessions = SessionManager<SqliteSessionRepository, SqliteUserRepository>;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Sessions>,
    pub accounts: Arc<AccountService<SqliteUserRepository>>,
    pub votes: Arc<VoteLedger<SqliteVoteRepository>>,
    pub engagement: Arc<EngagementAggregator<SqliteVoteRepository>>,
    pub session_settings: SessionSettings,
}

impl AppState {
    pub fn new(pool: SqlitePool, session_settings: SessionSettings) -> Self {
        Self::with_clock(pool, session_settings, Arc::new(SystemClock))
    }

    pub fn with_clock(pool: SqlitePool, session_settings: SessionSettings, clock: Arc<dyn Clock>) -> Self {
        let users = Arc::new(SqliteUserRepository::new(pool.clone()));
        let sessions = Arc::new(SqliteSessionRepository::new(pool.clone()));
        let votes = Arc::new(SqliteVoteRepository::with_clock(pool, clock.clone()));

        Self {
            sessions: Arc::new(SessionManager::with_clock(
                sessions,
                users.clone(),
                session_settings.ttl_hours,
                clock,
            )),
            accounts: Arc::new(AccountService::new(users)),
            votes: Arc::new(VoteLedger::new(votes.clone())),
            engagement: Arc::new(EngagementAggregator::new(votes)),
            session_settings,
        }
    }
}
