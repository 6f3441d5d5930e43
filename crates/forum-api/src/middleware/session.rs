// ============================================================================
// Forum API - Session Cookie Extraction
// File: crates/forum-api/src/middleware/session.rs
// ============================================================================
//! Resolves the session cookie into an identity before a handler runs.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use chrono::{DateTime, Utc};
use forum_core::domain::Identity;
use forum_shared::config::SessionSettings;

use crate::error::ApiError;
use crate::state::AppState;

/// Identity of the caller, if logged in
pub struct MaybeUser(pub Option<Identity>);

/// Identity of the caller; rejects anonymous requests with 401
pub struct CurrentUser(pub Identity);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers, &state.session_settings.cookie_name) else {
            return Ok(MaybeUser(None));
        };

        // storage errors surface as 500, never as "anonymous"
        let identity = state.sessions.resolve(&token).await?;
        Ok(MaybeUser(identity))
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match MaybeUser::from_request_parts(parts, state).await? {
            MaybeUser(Some(identity)) => Ok(CurrentUser(identity)),
            MaybeUser(None) => Err(ApiError::Unauthorized("Not authenticated".to_string())),
        }
    }
}

/// Value of the session cookie, if present and non-empty.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn session_cookie(settings: &SessionSettings, token: &str, expires_at: DateTime<Utc>) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Expires={}{}",
        settings.cookie_name,
        token,
        expires_at.format("%a, %d %b %Y %H:%M:%S GMT"),
        if settings.cookie_secure { "; Secure" } else { "" }
    )
}

pub fn clear_session_cookie(settings: &SessionSettings) -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT{}",
        settings.cookie_name,
        if settings.cookie_secure { "; Secure" } else { "" }
    )
}
