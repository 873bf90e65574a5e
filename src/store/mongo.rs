//! MongoDB-backed store.

use crate::config::{MongoEndpoint, MongoSettings};
use crate::error::{AppError, ConfigError};
use crate::query::FindQuery;
use crate::store::{CatalogStore, CollectionKind, UpdateOutcome};
use async_trait::async_trait;
use bson::{doc, Bson, Document};
use futures_util::TryStreamExt;
use mongodb::{
    options::{ClientOptions, Credential, ServerApi, ServerApiVersion},
    Client, Collection,
};
use tracing::{debug, info};

#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    toys: Collection<Document>,
    reviews: Collection<Document>,
}

impl MongoStore {
    /// Build the client. The driver connects lazily, so an unreachable server is only
    /// noticed by the first operation (or `ping`).
    pub async fn connect(settings: &MongoSettings) -> Result<Self, ConfigError> {
        let mut options = ClientOptions::parse(settings.connection_uri()).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );
        if let MongoEndpoint::Srv { user, password, .. } = &settings.endpoint {
            if user.is_some() || password.is_some() {
                options.credential = Some(
                    Credential::builder()
                        .username(user.clone())
                        .password(password.clone())
                        .build(),
                );
            }
        }
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let db = client.database(&settings.database);
        info!(
            database = %settings.database,
            toys = %settings.toys_collection,
            reviews = %settings.reviews_collection,
            "MongoDB client configured"
        );
        Ok(MongoStore {
            toys: db.collection(&settings.toys_collection),
            reviews: db.collection(&settings.reviews_collection),
            client,
        })
    }

    fn collection(&self, kind: CollectionKind) -> &Collection<Document> {
        match kind {
            CollectionKind::Toys => &self.toys,
            CollectionKind::Reviews => &self.reviews,
        }
    }
}

#[async_trait]
impl CatalogStore for MongoStore {
    async fn find(&self, collection: CollectionKind, query: &FindQuery) -> Result<Vec<Document>, AppError> {
        let mut action = self.collection(collection).find(query.filter.clone());
        if let Some(sort) = query.sort_document() {
            action = action.sort(sort);
        }
        if let Some(limit) = query.limit {
            action = action.limit(limit);
        }
        let cursor = action.await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        debug!(?collection, count = docs.len(), "find");
        Ok(docs)
    }

    async fn find_one(&self, collection: CollectionKind, filter: Document) -> Result<Option<Document>, AppError> {
        Ok(self.collection(collection).find_one(filter).await?)
    }

    async fn insert_one(&self, collection: CollectionKind, doc: Document) -> Result<Bson, AppError> {
        let result = self.collection(collection).insert_one(doc).await?;
        Ok(result.inserted_id)
    }

    async fn update_one(
        &self,
        collection: CollectionKind,
        filter: Document,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, AppError> {
        let result = self
            .collection(collection)
            .update_one(filter, doc! { "$set": set })
            .upsert(upsert)
            .await?;
        Ok(UpdateOutcome {
            matched: result.matched_count,
            upserted_id: result.upserted_id,
        })
    }

    async fn delete_one(&self, collection: CollectionKind, filter: Document) -> Result<u64, AppError> {
        let result = self.collection(collection).delete_one(filter).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client closed");
    }
}
