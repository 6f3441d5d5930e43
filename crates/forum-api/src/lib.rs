//! # Forum API
//! 
//! HTTP handlers, session cookie extraction, and error mapping.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
