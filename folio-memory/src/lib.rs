//! In-memory document storage backend.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It is selected with `DATABASE_URL=memory://` for local development and backs the
//! API's integration tests. Nothing is persisted across restarts.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_core::{backend::StoreBackendBuilder, store::DocumentStore};
//! use folio_memory::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DocumentStore::new(InMemoryStore::builder().build().await?);
//!
//!     let id = store.create_document(&inquiry).await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as folio_memory;

pub mod evaluator;
pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
