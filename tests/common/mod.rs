//! Shared helpers for the API tests: build the router over a store and send requests.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use bson::{Bson, Document};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use toy_catalog::query::FindQuery;
use toy_catalog::store::UpdateOutcome;
use toy_catalog::{app, AppError, AppState, CatalogStore, CollectionKind, MemoryStore, UnavailableStore};

pub const BODY_LIMIT: usize = 100 * 1024;

pub fn router(store: MemoryStore) -> Router {
    app(AppState::new(Arc::new(store)), BODY_LIMIT)
}

pub fn failing_router() -> Router {
    app(AppState::new(Arc::new(FailingStore)), BODY_LIMIT)
}

/// Router over the stand-in used when the database client could not be created.
pub fn unavailable_router() -> Router {
    app(AppState::new(Arc::new(UnavailableStore::new("dns error"))), BODY_LIMIT)
}

/// Send a request and decode the body as JSON (plain text comes back as a JSON string).
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(v) => send_raw(app, method, uri, Some("application/json"), v.to_string()).await,
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

/// Like `send`, but with an arbitrary content type and an unchecked body.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let req = builder.body(Body::from(body)).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let is_json = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    if !is_json {
        return (status, Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    }
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub fn numbers(items: &Value, field: &str) -> Vec<f64> {
    items
        .as_array()
        .expect("array body")
        .iter()
        .map(|d| d[field].as_f64().expect("numeric field"))
        .collect()
}

/// Every operation fails as if the database were unreachable.
pub struct FailingStore;

fn down() -> AppError {
    AppError::Store("connection refused".into())
}

#[async_trait]
impl CatalogStore for FailingStore {
    async fn find(&self, _: CollectionKind, _: &FindQuery) -> Result<Vec<Document>, AppError> {
        Err(down())
    }

    async fn find_one(&self, _: CollectionKind, _: Document) -> Result<Option<Document>, AppError> {
        Err(down())
    }

    async fn insert_one(&self, _: CollectionKind, _: Document) -> Result<Bson, AppError> {
        Err(down())
    }

    async fn update_one(&self, _: CollectionKind, _: Document, _: Document, _: bool) -> Result<UpdateOutcome, AppError> {
        Err(down())
    }

    async fn delete_one(&self, _: CollectionKind, _: Document) -> Result<u64, AppError> {
        Err(down())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(down())
    }
}
