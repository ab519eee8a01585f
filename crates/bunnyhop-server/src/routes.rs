//! Route definitions

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{health, listing, redirect},
    middleware::logging_middleware,
    state::AppState,
};

/// All routes. Any path without a dedicated route is a keyword query.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        // Command list
        .route("/", get(listing::command_list))
        .route("/cmdlist", get(listing::command_list))
        // Health check
        .route("/health", get(health::health_check))
        // Keyword queries
        .fallback(redirect::resolve_query)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
