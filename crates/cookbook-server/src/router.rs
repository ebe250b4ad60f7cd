use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Request body limit used by [`build_router`].
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// Build the axum router with all cookbook endpoints.
pub fn build_router(state: AppState) -> Router {
    build_router_with_limit(state, DEFAULT_BODY_LIMIT)
}

pub fn build_router_with_limit(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/parse", post(handler::parse_handler))
        .route("/entry", post(handler::create_entry_handler))
        .route("/summary", get(handler::summary_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
