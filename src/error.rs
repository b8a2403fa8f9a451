use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use canister::CanisterError;
use relay_core::ErrorDetail;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    /// A canister call failed. `action` completes "Failed to ...".
    Canister {
        action: &'static str,
        source: CanisterError,
    },
}

impl AppError {
    pub fn canister(action: &'static str) -> impl FnOnce(CanisterError) -> Self {
        move |source| AppError::Canister { action, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Canister { action, source } => {
                error!("Canister call failed ({}): {}", action, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {}: {}", action, source),
                )
            }
        };

        (status, Json(ErrorDetail { detail })).into_response()
    }
}
