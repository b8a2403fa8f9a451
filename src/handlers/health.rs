use axum::response::Json;
use relay_core::ApiResponse;

/// Never touches the canister, so it answers even when the replica is down.
pub async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message(
        "Rust backend is running and connected to ICP",
    ))
}
