//! Request extractors

pub mod session;

pub use session::{clear_session_cookie, session_cookie, session_token, CurrentUser, MaybeUser};
