//! # Forum Infrastructure
//! 
//! SQLite adapters for the forum core's repository ports.

pub mod database;

pub use database::{
    create_in_memory_pool, create_pool, run_migrations, SqliteSessionRepository,
    SqliteUserRepository, SqliteVoteRepository,
};
