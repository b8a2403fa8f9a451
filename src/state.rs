use canister::CanisterClient;
use std::sync::Arc;

pub type SharedState = AppState;

/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub canister: Arc<dyn CanisterClient>,
}

impl AppState {
    pub fn new(canister: impl CanisterClient + 'static) -> Self {
        Self {
            canister: Arc::new(canister),
        }
    }
}
