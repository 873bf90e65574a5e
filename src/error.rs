//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
    #[error("database client: {0}")]
    Client(#[from] mongodb::error::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
    #[error("invalid object id: '{0}'")]
    InvalidId(String),
    #[error("database: {0}")]
    Db(#[from] mongodb::error::Error),
    #[error("store: {0}")]
    Store(String),
    #[error("error {action}: {source}")]
    Internal {
        action: &'static str,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    /// Tags a server-side failure with the action that was in progress. Client-facing
    /// errors (not found, bad request) pass through unchanged.
    pub fn during(self, action: &'static str) -> Self {
        match self {
            AppError::NotFound(_)
            | AppError::BadRequest(_)
            | AppError::PayloadTooLarge(_)
            | AppError::Internal { .. } => self,
            other => AppError::Internal {
                action,
                source: Box::new(other),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidId(_)
            | AppError::Db(_)
            | AppError::Store(_)
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body extraction failures (wrong content type, bad JSON, over the size limit) keep the
/// JSON error shape of every other failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::BadRequest(rejection.body_text())
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) | AppError::PayloadTooLarge(msg) => {
                msg.clone()
            }
            AppError::Internal { action, .. } => {
                tracing::error!(error = %self, "request failed");
                format!("An error occurred while {}", action)
            }
            _ => {
                tracing::error!(error = %self, "request failed");
                "An error occurred while processing the request".to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
