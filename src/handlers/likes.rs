use super::require_post_id;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{Path, State},
    response::Json,
};
use relay_core::PostResultResponse;

pub async fn get_likes(
    State(state): State<SharedState>,
    path: Option<Path<String>>,
) -> Result<Json<PostResultResponse>, AppError> {
    let post_id = require_post_id(path)?;
    tracing::info!("Fetching likes for post: {}", post_id);

    let result = state
        .canister
        .get_likes(&post_id)
        .await
        .map_err(AppError::canister("get likes"))?;

    Ok(Json(PostResultResponse {
        post_id,
        result,
        message: "Likes retrieved from ICP canister".to_string(),
    }))
}

pub async fn like_post(
    State(state): State<SharedState>,
    path: Option<Path<String>>,
) -> Result<Json<PostResultResponse>, AppError> {
    let post_id = require_post_id(path)?;
    tracing::info!("Liking post: {}", post_id);

    let result = state
        .canister
        .like(&post_id)
        .await
        .map_err(AppError::canister("like post"))?;

    Ok(Json(PostResultResponse {
        post_id,
        result,
        message: "Post liked successfully on ICP canister".to_string(),
    }))
}
