//! Toy routes. Paths are kept as the existing frontend calls them.

use crate::handlers::{
    all_toys, create_toy, delete_toy, my_toys, top_rated, toy, toys_by_category, update_toy,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn toy_routes(state: AppState) -> Router {
    Router::new()
        .route("/all-toys", get(all_toys))
        .route("/category/:category", get(toys_by_category))
        .route("/toy", post(create_toy))
        .route("/toy/:id", get(toy))
        .route("/my-toy/:id", get(toy).put(update_toy))
        .route("/my-toys", get(my_toys))
        .route("/my-toys/:id", delete(delete_toy))
        .route("/top-rated-product", get(top_rated))
        .with_state(state)
}
