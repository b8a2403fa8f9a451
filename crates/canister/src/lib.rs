//! Client side of the post-likes canister.
//!
//! The relay talks to the canister only through [`CanisterClient`]. Replies are
//! handed back as JSON converted structurally from the decoded Candid values;
//! their shape is owned by the canister and is not validated here.

pub mod ic;
pub mod interface;
pub mod network;
pub mod value;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use candid::Principal;
pub use ic::IcCanister;
pub use interface::{CanisterInterface, InterfaceError};
pub use network::Network;

/// Method names exported by the post-likes canister.
pub mod methods {
    pub const GET_LIKES: &str = "get_likes";
    pub const LIKE: &str = "like";
    pub const GET_POSTS_WITH_LIKES: &str = "get_posts_with_likes";
    pub const CREATE_POST: &str = "create_post";
    pub const GET_POST: &str = "get_post";
}

/// Failure of a single canister call.
///
/// `Display` yields only the underlying text; callers add their own prefix.
#[derive(Debug, Error)]
pub enum CanisterError {
    #[error("canister interface does not declare method `{0}`")]
    UnknownMethod(String),
    #[error("{0}")]
    Interface(#[from] InterfaceError),
    #[error("{0}")]
    Encode(String),
    #[error("{0}")]
    Agent(#[from] ic_agent::AgentError),
    #[error("{0}")]
    Decode(String),
    /// Any other call failure, e.g. from a collaborator that is not backed by an agent.
    #[error("{0}")]
    Call(String),
}

#[async_trait]
pub trait CanisterClient: Send + Sync {
    async fn get_likes(&self, post_id: &str) -> Result<Value, CanisterError>;

    async fn like(&self, post_id: &str) -> Result<Value, CanisterError>;

    async fn get_posts_with_likes(&self) -> Result<Value, CanisterError>;

    async fn create_post(
        &self,
        id: &str,
        title: &str,
        content: &str,
    ) -> Result<Value, CanisterError>;

    async fn get_post(&self, post_id: &str) -> Result<Value, CanisterError>;
}
