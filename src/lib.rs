//! Toy catalog: REST API over a MongoDB-backed toy collection and customer reviews.

pub mod config;
pub mod document;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{from_env, MongoSettings, Settings};
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, review_routes, toy_routes};
pub use service::CatalogService;
pub use state::AppState;
pub use store::{CatalogStore, CollectionKind, MemoryStore, MongoStore, UnavailableStore};
