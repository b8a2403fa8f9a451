use serde::{Deserialize, Serialize};

/// A post as stored by the canister.
///
/// The relay never builds one of these; replies are passed through as JSON.
/// The type documents the shape clients can expect from `/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: u64,
}

/// Body of `POST /posts`.
///
/// Missing fields deserialize as empty strings so they fail validation
/// instead of being rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl CreatePostRequest {
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.title.is_empty() && !self.content.is_empty()
    }
}

/// Generic envelope used by the health check.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: message.into(),
            error: None,
        }
    }
}

/// Response of the per-post endpoints. `result` is the canister reply, untouched.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResultResponse {
    pub post_id: String,
    pub result: serde_json::Value,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: serde_json::Value,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub result: serde_json::Value,
    pub message: String,
}

/// Error body returned for every 4xx/5xx.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Returns the id unless it is empty or whitespace only.
pub fn non_blank(id: &str) -> Option<&str> {
    if id.trim().is_empty() {
        None
    } else {
        Some(id)
    }
}
