use super::require_post_id;
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use relay_core::{CreatePostRequest, CreatePostResponse, PostResultResponse, PostsResponse};

pub async fn get_posts(State(state): State<SharedState>) -> Result<Json<PostsResponse>, AppError> {
    tracing::info!("Fetching all posts with likes");

    let posts = state
        .canister
        .get_posts_with_likes()
        .await
        .map_err(AppError::canister("get posts"))?;

    Ok(Json(PostsResponse {
        posts,
        message: "Posts retrieved directly from ICP canister".to_string(),
    }))
}

pub async fn create_post(
    State(state): State<SharedState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<Json<CreatePostResponse>, AppError> {
    let request = match payload {
        Ok(Json(request)) if request.is_complete() => request,
        Ok(_) => return Err(AppError::BadRequest("All fields are required".to_string())),
        Err(rejection) => {
            tracing::warn!("Rejected create post body: {}", rejection.body_text());
            return Err(AppError::BadRequest("All fields are required".to_string()));
        }
    };
    tracing::info!("Creating post: {}", request.id);

    let result = state
        .canister
        .create_post(&request.id, &request.title, &request.content)
        .await
        .map_err(AppError::canister("create post"))?;

    Ok(Json(CreatePostResponse {
        result,
        message: "Post created successfully on ICP canister".to_string(),
    }))
}

pub async fn get_post(
    State(state): State<SharedState>,
    path: Option<Path<String>>,
) -> Result<Json<PostResultResponse>, AppError> {
    let post_id = require_post_id(path)?;
    tracing::info!("Fetching post: {}", post_id);

    let result = state
        .canister
        .get_post(&post_id)
        .await
        .map_err(AppError::canister("get post"))?;

    Ok(Json(PostResultResponse {
        post_id,
        result,
        message: "Post retrieved from ICP canister".to_string(),
    }))
}
