//! Response body helpers. Reads return bare documents; writes return a message body.

use crate::document::{document_to_json, documents_to_json};
use axum::{http::StatusCode, Json};
use bson::Document;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
    #[serde(rename = "insertedId", skip_serializing_if = "Option::is_none")]
    pub inserted_id: Option<Value>,
    #[serde(rename = "upsertedId", skip_serializing_if = "Option::is_none")]
    pub upserted_id: Option<Value>,
}

pub fn message(message: &'static str) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message,
            inserted_id: None,
            upserted_id: None,
        }),
    )
}

pub fn inserted(message: &'static str, id: Value) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message,
            inserted_id: Some(id),
            upserted_id: None,
        }),
    )
}

pub fn upserted(message: &'static str, id: Value) -> (StatusCode, Json<MessageBody>) {
    (
        StatusCode::OK,
        Json(MessageBody {
            message,
            inserted_id: None,
            upserted_id: Some(id),
        }),
    )
}

pub fn one(doc: Document) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(document_to_json(doc)))
}

pub fn many(docs: Vec<Document>) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(documents_to_json(docs)))
}
