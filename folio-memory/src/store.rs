//! In-memory storage implementation for document stores.
//!
//! Documents are kept as BSON values per collection, in insertion order, behind an
//! async-safe read-write lock.

use async_trait::async_trait;
use bson::{Bson, Document as BsonDocument, Uuid};
use mea::rwlock::RwLock;
use std::{collections::HashMap, sync::Arc};

use folio_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    error::StoreResult,
    query::Query,
};

use crate::evaluator::DocumentEvaluator;

type CollectionList = Vec<(String, Bson)>;
type StoreMap = HashMap<String, CollectionList>;

/// Thread-safe in-memory document storage backend.
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, allowing
/// it to be shared across async tasks. Clones of the same instance share the same
/// underlying data, which is how tests seed a store the API is already holding.
///
/// Queries scan every document of the collection; there is no indexing.
///
/// # Example
///
/// ```ignore
/// use folio_memory::InMemoryStore;
/// use folio_core::backend::StoreBackend;
/// use bson::doc;
///
/// let store = InMemoryStore::new();
/// let id = store.insert_document(doc! { "title": "Loft" }, "project").await?;
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// collection name -> (document id, document), in insertion order
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self { store: Arc::new(RwLock::new(StoreMap::new())) }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder
    }

    /// Returns the number of documents held in `collection`.
    pub async fn count(&self, collection: &str) -> usize {
        self.store
            .read()
            .await
            .get(collection)
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn insert_document(
        &self,
        document: BsonDocument,
        collection: &str,
    ) -> StoreResult<String> {
        let id = Uuid::new().to_string();

        self.store
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), Bson::Document(document)));

        Ok(id)
    }

    async fn query_documents(&self, query: Query, collection: &str) -> StoreResult<Vec<Bson>> {
        let store = self.store.read().await;
        let documents = match store.get(collection) {
            Some(documents) => documents,
            None => return Ok(vec![]),
        };

        Ok(documents
            .iter()
            .map(|(_, doc)| doc)
            .filter(|doc| match &query.filter {
                Some(filter) => DocumentEvaluator::matches(doc, filter),
                None => true,
            })
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let mut names = self
            .store
            .read()
            .await
            .keys()
            .cloned()
            .collect::<Vec<_>>();

        names.sort();
        Ok(names)
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Default)]
pub struct InMemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new, empty [`InMemoryStore`]. This always succeeds.
    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(InMemoryStore::new())
    }
}
