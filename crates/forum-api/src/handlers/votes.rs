// ============================================================================
// Forum API - Vote Handlers
// File: crates/forum-api/src/handlers/votes.rs
// ============================================================================

use axum::{
    extract::{Path, State},
    Json,
};
use forum_core::domain::{TargetRef, VoteCounts, VoteValue};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::{CurrentUser, MaybeUser};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub target_kind: String,
    pub target_id: i64,
    pub value: i64,
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub outcome: &'static str,
    pub current_vote: Option<VoteValue>,
    pub counts: VoteCounts,
}

#[derive(Debug, Serialize)]
pub struct CountsResponse {
    pub target_kind: &'static str,
    pub target_id: i64,
    pub counts: VoteCounts,
    pub my_vote: Option<VoteValue>,
}

#[derive(Debug, Serialize)]
pub struct LikedPostsResponse {
    pub post_ids: Vec<i64>,
}

/// Cast vote - POST /api/v1/votes
pub async fn cast_vote(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Json(payload): Json<VoteRequest>,
) -> Result<Json<ApiResponse<VoteResponse>>, ApiError> {
    let outcome = state
        .votes
        .apply_vote(identity.id, &payload.target_kind, payload.target_id, payload.value)
        .await?;

    // already accepted by the ledger above
    let target = TargetRef::parse(&payload.target_kind, payload.target_id)?;
    let counts = state.engagement.count_votes(target).await?;

    Ok(Json(ApiResponse::success(VoteResponse {
        outcome: outcome.as_str(),
        current_vote: outcome.current(),
        counts,
    })))
}

/// Vote counts - GET /api/v1/votes/{target_kind}/{target_id}
pub async fn get_counts(
    State(state): State<AppState>,
    MaybeUser(identity): MaybeUser,
    Path((target_kind, target_id)): Path<(String, i64)>,
) -> Result<Json<ApiResponse<CountsResponse>>, ApiError> {
    let target = TargetRef::parse(&target_kind, target_id)?;
    let counts = state.engagement.count_votes(target).await?;

    let my_vote = match identity {
        Some(identity) => state.votes.current_vote(identity.id, target).await?,
        None => None,
    };

    Ok(Json(ApiResponse::success(CountsResponse {
        target_kind: target.kind().as_str(),
        target_id: target.id(),
        counts,
        my_vote,
    })))
}

/// Liked posts - GET /api/v1/votes/liked-posts
pub async fn liked_posts(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<ApiResponse<LikedPostsResponse>>, ApiError> {
    let post_ids = state.votes.liked_posts(identity.id).await?;
    Ok(Json(ApiResponse::success(LikedPostsResponse { post_ids })))
}
