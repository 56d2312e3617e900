//! Storage backend abstraction for the document store.
//!
//! This module defines the traits that abstract over concrete storage implementations,
//! so the API can run against MongoDB in production and an in-memory store in development
//! and tests.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`DynStoreBackend`]: A trait for dynamic dispatch over backend implementations
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use folio_core::backend::StoreBackend;
//! use bson::doc;
//!
//! let backend = MyBackendImpl::new();
//!
//! let id = backend.insert_document(doc! { "name": "Alice" }, "inquiry").await?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use async_trait::async_trait;
use bson::{Bson, Document as BsonDocument};
use std::fmt::Debug;

use crate::{error::StoreResult, query::Query};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from multiple
/// async tasks. The backend is shared read-only between request handlers for the whole
/// process lifetime.
///
/// # Error Handling
///
/// Operations return [`StoreResult<T>`](crate::error::StoreResult). Failures are never
/// retried by callers.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts one document into a collection and returns the identifier the store assigned.
    ///
    /// # Arguments
    ///
    /// * `document` - The BSON document to insert
    /// * `collection` - The name of the collection to insert into. Created automatically if it doesn't exist.
    ///
    /// # Returns
    ///
    /// Returns the store-assigned identifier as a string, or a
    /// [`StoreError`](crate::error::StoreError) on failure.
    async fn insert_document(
        &self,
        document: BsonDocument,
        collection: &str,
    ) -> StoreResult<String>;

    /// Queries documents in a collection using a structured query.
    ///
    /// Documents are returned in whatever order the store yields them. Store-private keys
    /// such as `_id` are not part of the returned documents.
    ///
    /// # Arguments
    ///
    /// * `query` - The [`Query`] specifying the filter and limit
    /// * `collection` - The name of the collection to query
    async fn query_documents(&self, query: Query, collection: &str) -> StoreResult<Vec<Bson>>;

    /// Lists the names of all collections in the store.
    async fn list_collections(&self) -> StoreResult<Vec<String>>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op, but backends with external connections
    /// should override this.
    async fn shutdown(self) -> StoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
pub trait DynStoreBackend: Send + Sync + Debug {
    async fn insert_document(
        &self,
        document: BsonDocument,
        collection: &str,
    ) -> StoreResult<String>;
    async fn query_documents(&self, query: Query, collection: &str) -> StoreResult<Vec<Bson>>;
    async fn list_collections(&self) -> StoreResult<Vec<String>>;
    async fn shutdown_boxed(self: Box<Self>) -> StoreResult<()>;
}

#[async_trait]
impl<B: StoreBackend + 'static> DynStoreBackend for B {
    async fn insert_document(
        &self,
        document: BsonDocument,
        collection: &str,
    ) -> StoreResult<String> {
        StoreBackend::insert_document(self, document, collection).await
    }

    async fn query_documents(&self, query: Query, collection: &str) -> StoreResult<Vec<Bson>> {
        StoreBackend::query_documents(self, query, collection).await
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        StoreBackend::list_collections(self).await
    }

    async fn shutdown_boxed(self: Box<Self>) -> StoreResult<()> {
        StoreBackend::shutdown(*self).await
    }
}

#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> StoreResult<Self::Backend>;
}
