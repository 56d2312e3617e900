//! Storage layer for the portfolio API.
//!
//! This crate provides the storage side of the service:
//!
//! - **Document traits** ([`document`]) - Records that know which collection they live in
//! - **Store backend abstraction** ([`backend`]) - Traits implemented by the memory and MongoDB backends
//! - **Query API** ([`query`]) - Equality filters built from a field -> value map
//! - **Storage adapter** ([`store`]) - [`store::DocumentStore`] and the two-state [`store::Storage`] capability
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use folio_core::store::{DocumentStore, Storage};
//! use bson::doc;
//! use std::sync::Arc;
//!
//! let storage = Storage::Available(Arc::new(DocumentStore::new(backend)));
//!
//! if let Some(store) = storage.available() {
//!     let docs = store.get_documents("project", doc! { "featured": true }, 10).await?;
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as folio_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod query;
pub mod store;
