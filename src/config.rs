use anyhow::{Context, Result};
use canister::{Network, Principal};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CANDID_PATH: &str = "candid/post_likes_backend.did";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub network: Network,
    pub canister_id: Principal,
    pub candid_path: PathBuf,
    pub port: u16,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let network =
            Network::from_selector(&lookup("DFX_NETWORK").unwrap_or_else(|| "local".to_string()));

        let canister_id = lookup("POST_LIKES_BACKEND_CANISTER_ID")
            .filter(|id| !id.trim().is_empty())
            .context("POST_LIKES_BACKEND_CANISTER_ID environment variable must be set")?;
        let canister_id = Principal::from_text(canister_id.trim())
            .with_context(|| format!("Invalid canister ID: {}", canister_id))?;

        let candid_path = lookup("CANDID_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CANDID_PATH));

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            network,
            canister_id,
            candid_path,
            port,
        })
    }
}
