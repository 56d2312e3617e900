//! MongoDB backend implementation.
//!
//! This crate provides a MongoDB-based implementation of the `StoreBackend` trait. The API
//! enables it through its `mongodb` feature (on by default) and selects it when
//! `DATABASE_URL` is a `mongodb://` or `mongodb+srv://` connection string.
//!
//! Documents are stored as-is; no key escaping is applied.
//!
//! # Example
//!
//! ```ignore
//! use folio_core::backend::StoreBackendBuilder;
//! use folio_mongodb::MongoDbStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MongoDbStore::builder("mongodb://localhost:27017", "portfolio")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as folio_mongodb;

pub mod query;
pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
