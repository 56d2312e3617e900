//! Storage adapter used by the request handlers.
//!
//! This module provides:
//!
//! - [`DocumentStore`] - Bridge between validated records and a backend
//! - [`Storage`] - The process-wide storage capability: a live store, or none at all
//!
//! # Example
//!
//! ```ignore
//! use folio_core::store::{DocumentStore, Storage};
//!
//! let storage = Storage::Available(Arc::new(DocumentStore::new(backend)));
//!
//! match storage.available() {
//!     Some(store) => store.create_document(&inquiry).await?,
//!     None => { /* fallback */ }
//! }
//! ```

use bson::{Bson, DateTime, Document as BsonDocument};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    backend::{DynStoreBackend, StoreBackend},
    document::{Document, DocumentExt},
    error::StoreResult,
    query::{Filter, Query},
};

/// A document store bound to a backend chosen at runtime.
#[derive(Debug)]
pub struct DocumentStore {
    backend: Box<dyn DynStoreBackend>,
}

impl DocumentStore {
    /// Creates a new document store over the given backend.
    pub fn new<B: StoreBackend + 'static>(backend: B) -> Self {
        Self { backend: Box::new(backend) }
    }

    /// Lists all collections in the store.
    ///
    /// Used as a liveness probe.
    pub async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        self.backend.list_collections().await
    }

    /// Returns at most `limit` raw documents of `collection` matching every entry of `filter`.
    ///
    /// An empty filter matches every document. A `limit` of zero returns nothing without
    /// touching the backend. Result order is whatever the backend yields.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend query fails.
    pub async fn get_documents(
        &self,
        collection: &str,
        filter: BsonDocument,
        limit: usize,
    ) -> StoreResult<Vec<Bson>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let query = Query::builder()
            .maybe_filter(Filter::matching(filter))
            .limit(limit)
            .build();

        self.backend.query_documents(query, collection).await
    }

    /// Inserts one validated record into its collection and returns the store-assigned id.
    ///
    /// The stored document is stamped with `created_at` and `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the insert fails.
    pub async fn create_document<D: Document>(&self, record: &D) -> StoreResult<String> {
        let mut document = record.to_bson_document()?;
        let now = DateTime::from_chrono(Utc::now());

        document.insert("created_at", now);
        document.insert("updated_at", now);

        self.backend
            .insert_document(document, D::collection_name())
            .await
    }

    /// Shuts down the store and releases backend resources.
    pub async fn shutdown(self) -> StoreResult<()> {
        self.backend.shutdown_boxed().await
    }
}

/// The storage capability shared by every handler.
///
/// Decided once at startup and never changed afterwards: there is no reconnect logic.
#[derive(Debug, Clone)]
pub enum Storage {
    /// A live document store.
    Available(Arc<DocumentStore>),
    /// No store was configured, or it could not be reached at startup.
    Unavailable,
}

impl Storage {
    /// Returns the live store, or `None` when handlers must fall back.
    pub fn available(&self) -> Option<&DocumentStore> {
        match self {
            Storage::Available(store) => Some(store),
            Storage::Unavailable => None,
        }
    }

    /// Whether a live store is held.
    pub fn is_available(&self) -> bool {
        matches!(self, Storage::Available(_))
    }

    /// Shuts the store down if this is the last handle to it.
    pub async fn shutdown(self) -> StoreResult<()> {
        match self {
            Storage::Available(store) => match Arc::try_unwrap(store) {
                Ok(store) => store.shutdown().await,
                Err(_) => Ok(()),
            },
            Storage::Unavailable => Ok(()),
        }
    }
}

impl From<DocumentStore> for Storage {
    fn from(store: DocumentStore) -> Self {
        Storage::Available(Arc::new(store))
    }
}
