//! Shared helpers for the HTTP integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, header};
use axum::response::Response;
use bson::{Bson, Document as BsonDocument, doc};
use http_body_util::BodyExt;
use mea::rwlock::RwLock;
use serde_json::Value;
use tower::ServiceExt;

use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::backend::StoreBackend;
use folio_core::error::{StoreError, StoreResult};
use folio_core::query::Query;
use folio_core::store::{DocumentStore, Storage};
use folio_memory::InMemoryStore;

/// Build the full application router over the given storage.
pub fn build_test_app(storage: Storage) -> Router {
    build_app_router(AppState::new(storage))
}

/// An app running without a store.
pub fn unavailable_app() -> Router {
    build_test_app(Storage::Unavailable)
}

/// An app over a fresh in-memory store, plus a handle to the same store.
pub fn memory_app() -> (Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let app = build_test_app(Storage::from(DocumentStore::new(store.clone())));

    (app, store)
}

/// Insert raw documents straight into a store, bypassing validation.
pub async fn seed(store: &InMemoryStore, collection: &str, documents: Vec<BsonDocument>) {
    for document in documents {
        StoreBackend::insert_document(store, document, collection)
            .await
            .unwrap();
    }
}

/// Every raw document a store holds in `collection`.
pub async fn stored(store: &InMemoryStore, collection: &str) -> Vec<Bson> {
    StoreBackend::query_documents(store, Query::new(), collection)
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A backend whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingBackend;

#[async_trait]
impl StoreBackend for FailingBackend {
    async fn insert_document(&self, _: BsonDocument, _: &str) -> StoreResult<String> {
        Err(StoreError::Backend("connection reset".into()))
    }

    async fn query_documents(&self, _: Query, _: &str) -> StoreResult<Vec<Bson>> {
        Err(StoreError::Backend("connection reset".into()))
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        Err(StoreError::Backend("server selection timeout".into()))
    }
}

/// A backend that records every query and answers with one stock project.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub queries: Arc<RwLock<Vec<(String, Query)>>>,
}

#[async_trait]
impl StoreBackend for RecordingBackend {
    async fn insert_document(&self, _: BsonDocument, _: &str) -> StoreResult<String> {
        Ok("recorded".into())
    }

    async fn query_documents(&self, query: Query, collection: &str) -> StoreResult<Vec<Bson>> {
        self.queries.write().await.push((collection.to_string(), query));
        Ok(vec![Bson::Document(doc! { "title": "Loft", "category": "Home" })])
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        Ok(vec!["project".into()])
    }
}

/// An app over a failing store.
pub fn failing_app() -> Router {
    build_test_app(Storage::from(DocumentStore::new(FailingBackend)))
}

/// An app over a recording store, plus a handle to its query log.
pub fn recording_app() -> (Router, RecordingBackend) {
    let backend = RecordingBackend::default();
    let app = build_test_app(Storage::from(DocumentStore::new(backend.clone())));

    (app, backend)
}
