mod health;
mod likes;
mod posts;

pub use health::health;
pub use likes::{get_likes, like_post};
pub use posts::{create_post, get_post, get_posts};

use crate::error::AppError;
use axum::extract::Path;

const EMPTY_POST_ID: &str = "Post ID cannot be empty";

/// Pulls the post id out of the path. `/likes/` with no id counts as blank.
fn require_post_id(path: Option<Path<String>>) -> Result<String, AppError> {
    let post_id = path.map(|Path(id)| id).unwrap_or_default();
    match relay_core::non_blank(&post_id) {
        Some(_) => Ok(post_id),
        None => Err(AppError::BadRequest(EMPTY_POST_ID.to_string())),
    }
}
