use crate::handlers::customer_reviews;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn review_routes(state: AppState) -> Router {
    Router::new()
        .route("/customer-review", get(customer_reviews))
        .with_state(state)
}
