// ============================================================================
// Forum API - Auth Handlers
// File: crates/forum-api/src/handlers/auth.rs
// ============================================================================
//! Registration, login, logout and current-user handlers

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use forum_core::domain::{Identity, User};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::{clear_session_cookie, session_cookie, session_token, CurrentUser};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Login request payload
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register request payload
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// User DTO for responses
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<Identity> for UserDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username,
            email: identity.email,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserDto,
    pub expires_at: DateTime<Utc>,
}

/// Register handler - POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserDto>>), ApiError> {
    if payload.email.is_empty() || payload.username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }

    let user = state
        .accounts
        .register(&payload.email, &payload.username, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(UserDto::from(user)))))
}

/// Login handler - POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::BadRequest("Email and password are required".to_string()));
    }

    let result = state.sessions.login(&payload.email, &payload.password).await?;
    let cookie = session_cookie(&state.session_settings, &result.session.token, result.session.expires_at);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(ApiResponse::success(LoginResponse {
            user: UserDto::from(result.identity),
            expires_at: result.session.expires_at,
        })),
    ))
}

/// Logout handler - POST /api/v1/auth/logout
///
/// Always answers 200 and expires the cookie, whether or not the session row
/// could be deleted.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = session_token(&headers, &state.session_settings.cookie_name) {
        state.sessions.revoke(&token).await;
    }

    (
        [(SET_COOKIE, clear_session_cookie(&state.session_settings))],
        Json(ApiResponse::empty()),
    )
}

/// Current user - GET /api/v1/auth/me
pub async fn me(CurrentUser(identity): CurrentUser) -> Json<ApiResponse<UserDto>> {
    Json(ApiResponse::success(UserDto::from(identity)))
}
