//! Customer review listing (read-only).

use crate::error::AppError;
use crate::response;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn customer_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reviews = CatalogService::customer_reviews(state.store.as_ref())
        .await
        .map_err(|e| e.during("fetching customer reviews"))?;
    Ok(response::many(reviews))
}
