//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, health, votes};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth routes
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/me", get(auth::me))
        // Vote routes
        .route("/api/v1/votes", post(votes::cast_vote))
        .route("/api/v1/votes/liked-posts", get(votes::liked_posts))
        .route("/api/v1/votes/{target_kind}/{target_id}", get(votes::get_counts))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
