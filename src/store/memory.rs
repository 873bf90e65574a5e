//! In-process store with the same observable behavior as the MongoDB store for the
//! operations the catalog uses: exact-match filters, single-field sort, limit, `$set` upserts.

use crate::error::AppError;
use crate::query::{FindQuery, SortDirection};
use crate::store::{CatalogStore, CollectionKind, UpdateOutcome};
use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use std::cmp::Ordering;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
pub struct MemoryStore {
    toys: RwLock<Vec<Document>>,
    reviews: RwLock<Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed toys; documents without `_id` are given a fresh ObjectId.
    pub fn with_toys(self, docs: impl IntoIterator<Item = Document>) -> Self {
        let docs = docs.into_iter().map(|d| with_id(d).0).collect();
        MemoryStore {
            toys: RwLock::new(docs),
            ..self
        }
    }

    pub fn with_reviews(self, docs: impl IntoIterator<Item = Document>) -> Self {
        let docs = docs.into_iter().map(|d| with_id(d).0).collect();
        MemoryStore {
            reviews: RwLock::new(docs),
            ..self
        }
    }

    fn lock(&self, kind: CollectionKind) -> &RwLock<Vec<Document>> {
        match kind {
            CollectionKind::Toys => &self.toys,
            CollectionKind::Reviews => &self.reviews,
        }
    }

    fn read(&self, kind: CollectionKind) -> Result<RwLockReadGuard<'_, Vec<Document>>, AppError> {
        self.lock(kind)
            .read()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }

    fn write(&self, kind: CollectionKind) -> Result<RwLockWriteGuard<'_, Vec<Document>>, AppError> {
        self.lock(kind)
            .write()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }
}

/// Ensure `_id` is present and first; returns the document and its id.
fn with_id(doc: Document) -> (Document, Bson) {
    if let Some(id) = doc.get("_id").cloned() {
        return (doc, id);
    }
    let id = Bson::ObjectId(ObjectId::new());
    let mut out = Document::new();
    out.insert("_id", id.clone());
    out.extend(doc);
    (out, id)
}

fn matches(doc: &Document, filter: &Document) -> bool {
    filter.iter().all(|(k, v)| doc.get(k) == Some(v))
}

/// Missing/null < numbers < strings < everything else, mirroring the server's type order.
fn type_rank(v: Option<&Bson>) -> u8 {
    match v {
        None | Some(Bson::Null) | Some(Bson::Undefined) => 0,
        Some(Bson::Int32(_)) | Some(Bson::Int64(_)) | Some(Bson::Double(_)) => 1,
        Some(Bson::String(_)) => 2,
        Some(_) => 3,
    }
}

fn as_f64(v: &Bson) -> Option<f64> {
    match v {
        Bson::Int32(n) => Some(*n as f64),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(f) => Some(*f),
        _ => None,
    }
}

fn compare_field(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    let (ra, rb) = (type_rank(a), type_rank(b));
    if ra != rb {
        return ra.cmp(&rb);
    }
    match (a, b) {
        (Some(Bson::String(x)), Some(Bson::String(y))) => x.cmp(y),
        (Some(x), Some(y)) => match (as_f64(x), as_f64(y)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find(&self, collection: CollectionKind, query: &FindQuery) -> Result<Vec<Document>, AppError> {
        let docs = self.read(collection)?;
        let mut out: Vec<Document> = docs.iter().filter(|d| matches(d, &query.filter)).cloned().collect();
        if let Some((field, direction)) = &query.sort {
            out.sort_by(|a, b| {
                let ord = compare_field(a.get(field), b.get(field));
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
        // A limit of 0 means no limit; negative limits behave like their absolute value.
        if let Some(limit) = query.limit.filter(|n| *n != 0) {
            out.truncate(limit.unsigned_abs() as usize);
        }
        Ok(out)
    }

    async fn find_one(&self, collection: CollectionKind, filter: Document) -> Result<Option<Document>, AppError> {
        let docs = self.read(collection)?;
        Ok(docs.iter().find(|d| matches(d, &filter)).cloned())
    }

    async fn insert_one(&self, collection: CollectionKind, doc: Document) -> Result<Bson, AppError> {
        let (doc, id) = with_id(doc);
        let mut docs = self.write(collection)?;
        if docs.iter().any(|d| d.get("_id") == Some(&id)) {
            return Err(AppError::Store(format!("duplicate key: _id {}", id)));
        }
        docs.push(doc);
        Ok(id)
    }

    async fn update_one(
        &self,
        collection: CollectionKind,
        filter: Document,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, AppError> {
        let mut docs = self.write(collection)?;
        if let Some(doc) = docs.iter_mut().find(|d| matches(d, &filter)) {
            doc.extend(set);
            return Ok(UpdateOutcome {
                matched: 1,
                upserted_id: None,
            });
        }
        if !upsert {
            return Ok(UpdateOutcome::default());
        }
        let mut seed = filter;
        seed.extend(set);
        let (doc, id) = with_id(seed);
        docs.push(doc);
        Ok(UpdateOutcome {
            matched: 0,
            upserted_id: Some(id),
        })
    }

    async fn delete_one(&self, collection: CollectionKind, filter: Document) -> Result<u64, AppError> {
        let mut docs = self.write(collection)?;
        match docs.iter().position(|d| matches(d, &filter)) {
            Some(i) => {
                docs.remove(i);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
