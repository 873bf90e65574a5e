//! One method per catalog operation. Each issues a single store call and turns an
//! empty or absent result into `NotFound`.

use crate::error::AppError;
use crate::query::{self, FindQuery, SortDirection};
use crate::store::{CatalogStore, CollectionKind};
use bson::{Bson, Document};

/// Result of a PUT: either an existing toy was updated or a new one was inserted.
#[derive(Clone, Debug, PartialEq)]
pub enum Upserted {
    Updated,
    Inserted(Bson),
}

pub struct CatalogService;

impl CatalogService {
    async fn list(
        store: &dyn CatalogStore,
        collection: CollectionKind,
        q: &FindQuery,
        empty_message: &str,
    ) -> Result<Vec<Document>, AppError> {
        let docs = store.find(collection, q).await?;
        if docs.is_empty() {
            return Err(AppError::NotFound(empty_message.into()));
        }
        Ok(docs)
    }

    pub async fn all_toys(store: &dyn CatalogStore) -> Result<Vec<Document>, AppError> {
        Self::list(store, CollectionKind::Toys, &query::all_toys(), "No toys found").await
    }

    pub async fn toys_in_category(store: &dyn CatalogStore, category: &str) -> Result<Vec<Document>, AppError> {
        Self::list(
            store,
            CollectionKind::Toys,
            &query::toys_in_category(category),
            "No toys found in this category",
        )
        .await
    }

    pub async fn seller_toys(
        store: &dyn CatalogStore,
        email: Option<&str>,
        direction: SortDirection,
    ) -> Result<Vec<Document>, AppError> {
        Self::list(
            store,
            CollectionKind::Toys,
            &query::seller_toys(email, direction),
            "No toys found",
        )
        .await
    }

    pub async fn top_rated(store: &dyn CatalogStore) -> Result<Vec<Document>, AppError> {
        Self::list(store, CollectionKind::Toys, &query::top_rated(), "No toys found").await
    }

    pub async fn customer_reviews(store: &dyn CatalogStore) -> Result<Vec<Document>, AppError> {
        Self::list(
            store,
            CollectionKind::Reviews,
            &FindQuery::all(),
            "No customer reviews found",
        )
        .await
    }

    pub async fn toy(store: &dyn CatalogStore, id: &str) -> Result<Document, AppError> {
        let id = query::parse_object_id(id)?;
        store
            .find_one(CollectionKind::Toys, query::by_id(id))
            .await?
            .ok_or_else(|| AppError::NotFound("Toy not found".into()))
    }

    /// Insert a new toy as given. Success means the driver returned an id.
    pub async fn create_toy(store: &dyn CatalogStore, toy: Document) -> Result<Bson, AppError> {
        store.insert_one(CollectionKind::Toys, toy).await
    }

    /// `$set` the given fields on the toy, inserting it under `id` when absent.
    pub async fn update_toy(store: &dyn CatalogStore, id: &str, set: Document) -> Result<Upserted, AppError> {
        let id = query::parse_object_id(id)?;
        let outcome = store
            .update_one(CollectionKind::Toys, query::by_id(id), set, true)
            .await?;
        match (outcome.matched, outcome.upserted_id) {
            (_, Some(new_id)) => Ok(Upserted::Inserted(new_id)),
            (n, None) if n > 0 => Ok(Upserted::Updated),
            _ => Err(AppError::NotFound("Toy not found".into())),
        }
    }

    pub async fn delete_toy(store: &dyn CatalogStore, id: &str) -> Result<(), AppError> {
        let id = query::parse_object_id(id)?;
        match store.delete_one(CollectionKind::Toys, query::by_id(id)).await? {
            1 => Ok(()),
            _ => Err(AppError::NotFound("Toy not found".into())),
        }
    }
}
