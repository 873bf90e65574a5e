//! Database access for the catalog. One `CatalogStore` is opened at startup, shared by
//! every request through `AppState`, and shut down after the server drains.

pub mod memory;
pub mod mongo;
pub mod unavailable;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use unavailable::UnavailableStore;

use crate::config::MongoSettings;
use std::sync::Arc;

use crate::error::AppError;
use crate::query::FindQuery;
use async_trait::async_trait;
use bson::{Bson, Document};

/// Which collection an operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Toys,
    Reviews,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateOutcome {
    pub matched: u64,
    /// Set when the update inserted a new document instead of matching one.
    pub upserted_id: Option<Bson>,
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find(&self, collection: CollectionKind, query: &FindQuery) -> Result<Vec<Document>, AppError>;

    async fn find_one(&self, collection: CollectionKind, filter: Document) -> Result<Option<Document>, AppError>;

    /// Returns the `_id` of the inserted document.
    async fn insert_one(&self, collection: CollectionKind, doc: Document) -> Result<Bson, AppError>;

    /// Applies `$set` with `set` to the first document matching `filter`.
    async fn update_one(
        &self,
        collection: CollectionKind,
        filter: Document,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, AppError>;

    /// Returns the number of documents deleted (0 or 1).
    async fn delete_one(&self, collection: CollectionKind, filter: Document) -> Result<u64, AppError>;

    async fn ping(&self) -> Result<(), AppError>;

    async fn shutdown(&self) {}
}

/// Open the MongoDB store. Never fails: if the client cannot be built (bad URI, SRV
/// lookup failure) the error is logged and an `UnavailableStore` is returned instead.
pub async fn open(settings: &MongoSettings) -> Arc<dyn CatalogStore> {
    match MongoStore::connect(settings).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!(error = %e, "could not create MongoDB client, serving without a database");
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    }
}
