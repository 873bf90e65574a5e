//! Route tables and the middleware stack shared by every route.

mod common;
mod review;
mod toy;

pub use common::common_routes;
pub use review::review_routes;
pub use toy::toy_routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Full application: all routes with CORS, body limit and request tracing.
/// The body limit is enforced by the JSON extractor so an oversized body still gets a JSON 413.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(toy_routes(state.clone()))
        .merge(review_routes(state))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
