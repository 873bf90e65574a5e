//! Stand-in used when the database client could not be built at startup. The server
//! still listens; every operation fails with the startup error and maps to a 500.

use crate::error::AppError;
use crate::query::FindQuery;
use crate::store::{CatalogStore, CollectionKind, UpdateOutcome};
use async_trait::async_trait;
use bson::{Bson, Document};

pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        UnavailableStore { reason: reason.into() }
    }

    fn fail<T>(&self) -> Result<T, AppError> {
        Err(AppError::Store(format!("database unavailable: {}", self.reason)))
    }
}

#[async_trait]
impl CatalogStore for UnavailableStore {
    async fn find(&self, _: CollectionKind, _: &FindQuery) -> Result<Vec<Document>, AppError> {
        self.fail()
    }

    async fn find_one(&self, _: CollectionKind, _: Document) -> Result<Option<Document>, AppError> {
        self.fail()
    }

    async fn insert_one(&self, _: CollectionKind, _: Document) -> Result<Bson, AppError> {
        self.fail()
    }

    async fn update_one(&self, _: CollectionKind, _: Document, _: Document, _: bool) -> Result<UpdateOutcome, AppError> {
        self.fail()
    }

    async fn delete_one(&self, _: CollectionKind, _: Document) -> Result<u64, AppError> {
        self.fail()
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.fail()
    }
}
