//! Path, query and body parameter parsing for the toy routes.

use crate::document::json_to_bson;
use crate::error::AppError;
use bson::{oid::ObjectId, Document};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Fields a PUT may overwrite. Anything else in the body is ignored.
pub const UPDATABLE_FIELDS: &[&str] = &["toyName", "price", "category", "quantity", "descriptions"];

/// Parse a path id as an ObjectId. Malformed ids are a server error, not a 404.
pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

pub fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// `$set` payload for an update: the updatable fields present in the body.
pub fn update_fields(body: &Map<String, Value>) -> Result<Document, AppError> {
    let mut set = Document::new();
    for field in UPDATABLE_FIELDS {
        if let Some(v) = body.get(*field) {
            set.insert(*field, json_to_bson(v.clone()));
        }
    }
    if set.is_empty() {
        return Err(AppError::BadRequest(format!(
            "body must contain at least one of: {}",
            UPDATABLE_FIELDS.join(", ")
        )));
    }
    Ok(set)
}

#[derive(Debug, Default, Deserialize)]
pub struct MyToysParams {
    #[serde(rename = "sortType")]
    pub sort_type: Option<String>,
    pub email: Option<String>,
}

impl MyToysParams {
    /// Seller filter; an empty `email` means no filter.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }
}
