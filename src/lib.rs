pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::SharedState;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/likes/", get(handlers::get_likes))
        .route("/likes/:post_id", get(handlers::get_likes))
        .route("/like/", post(handlers::like_post))
        .route("/like/:post_id", post(handlers::like_post))
        .route("/posts", get(handlers::get_posts).post(handlers::create_post))
        .route("/posts/", get(handlers::get_post))
        .route("/posts/:post_id", get(handlers::get_post))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// Any origin, method and header, with credentials.
///
/// Browsers reject `*` together with credentials, so the request's own
/// origin, method and headers are mirrored back instead.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
