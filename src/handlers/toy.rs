//! Toy handlers: listings, lookup by id, create, update, delete.

use crate::document::{bson_to_json, json_object_to_document};
use crate::error::AppError;
use crate::query::{body_to_map, update_fields, MyToysParams, SortDirection};
use crate::response;
use crate::service::{CatalogService, Upserted};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn all_toys(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let toys = CatalogService::all_toys(state.store.as_ref())
        .await
        .map_err(|e| e.during("fetching toys"))?;
    Ok(response::many(toys))
}

pub async fn toys_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let toys = CatalogService::toys_in_category(state.store.as_ref(), &category)
        .await
        .map_err(|e| e.during("fetching toys"))?;
    Ok(response::many(toys))
}

/// Serves both `/toy/:id` and `/my-toy/:id`.
pub async fn toy(State(state): State<AppState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let toy = CatalogService::toy(state.store.as_ref(), &id)
        .await
        .map_err(|e| e.during("fetching the toy"))?;
    Ok(response::one(toy))
}

pub async fn my_toys(
    State(state): State<AppState>,
    Query(params): Query<MyToysParams>,
) -> Result<impl IntoResponse, AppError> {
    let direction = SortDirection::from_sort_type(params.sort_type.as_deref());
    let toys = CatalogService::seller_toys(state.store.as_ref(), params.email(), direction)
        .await
        .map_err(|e| e.during("fetching toys"))?;
    Ok(response::many(toys))
}

pub async fn delete_toy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    CatalogService::delete_toy(state.store.as_ref(), &id)
        .await
        .map_err(|e| e.during("deleting the toy"))?;
    tracing::info!(%id, "toy deleted");
    Ok(response::message("Toy deleted successfully"))
}

pub async fn update_toy(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let body = body_to_map(body)?;
    let set = update_fields(&body)?;
    let outcome = CatalogService::update_toy(state.store.as_ref(), &id, set)
        .await
        .map_err(|e| e.during("updating the toy"))?;
    Ok(match outcome {
        Upserted::Updated => {
            tracing::info!(%id, "toy updated");
            response::message("Toy updated successfully")
        }
        Upserted::Inserted(new_id) => {
            tracing::info!(%id, "toy inserted by upsert");
            response::upserted("Toy created successfully", bson_to_json(new_id))
        }
    })
}

pub async fn create_toy(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let toy = json_object_to_document(body_to_map(body)?);
    let id = CatalogService::create_toy(state.store.as_ref(), toy)
        .await
        .map_err(|e| e.during("creating the toy"))?;
    let id = bson_to_json(id);
    tracing::info!(id = %id, "toy created");
    Ok(response::inserted("Toy created successfully", id))
}

pub async fn top_rated(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let toys = CatalogService::top_rated(state.store.as_ref())
        .await
        .map_err(|e| e.during("fetching toys"))?;
    Ok(response::many(toys))
}
