pub const LOCAL_ENDPOINT: &str = "http://127.0.0.1:4943";
pub const MAINNET_ENDPOINT: &str = "https://ic0.app";

/// Which replica the agent talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Local,
    Mainnet,
}

impl Network {
    /// `"local"` selects the local replica; anything else is mainnet.
    pub fn from_selector(selector: &str) -> Self {
        if selector == "local" {
            Self::Local
        } else {
            Self::Mainnet
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Local => LOCAL_ENDPOINT,
            Self::Mainnet => MAINNET_ENDPOINT,
        }
    }

    /// The local replica signs with a throwaway root key that must be fetched.
    pub fn needs_root_key(&self) -> bool {
        matches!(self, Self::Local)
    }
}
