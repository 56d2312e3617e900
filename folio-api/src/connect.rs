//! Startup storage selection.
//!
//! The server never fails to start because of its store: anything other than a
//! reachable, supported store yields [`Storage::Unavailable`] and a warning.

use folio_core::{
    backend::StoreBackendBuilder,
    store::{DocumentStore, Storage},
};
use folio_memory::InMemoryStore;

use crate::config::ServerConfig;

/// Where `DATABASE_URL` points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTarget<'a> {
    /// Process-local store; contents vanish on exit.
    Memory,
    /// A MongoDB deployment addressed by this connection string.
    MongoDb(&'a str),
    /// A scheme this server does not know.
    Unsupported(&'a str),
}

impl<'a> StoreTarget<'a> {
    pub fn parse(url: &'a str) -> Self {
        if url.starts_with("memory://") {
            StoreTarget::Memory
        } else if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
            StoreTarget::MongoDb(url)
        } else {
            StoreTarget::Unsupported(url.split("://").next().unwrap_or(url))
        }
    }
}

/// Builds the storage capability described by `config`.
pub async fn connect_storage(config: &ServerConfig) -> Storage {
    let Some(url) = config.database_url.as_deref() else {
        tracing::info!("DATABASE_URL not set, serving demo content");
        return Storage::Unavailable;
    };

    match StoreTarget::parse(url) {
        StoreTarget::Memory => match InMemoryStore::builder().build().await {
            Ok(store) => {
                tracing::info!("Using in-memory document store");
                Storage::from(DocumentStore::new(store))
            }
            Err(e) => {
                tracing::warn!(error = %e, "In-memory store failed to start, serving demo content");
                Storage::Unavailable
            }
        },
        StoreTarget::MongoDb(dsn) => connect_mongodb(dsn, config).await,
        StoreTarget::Unsupported(scheme) => {
            tracing::warn!(scheme, "Unsupported DATABASE_URL scheme, serving demo content");
            Storage::Unavailable
        }
    }
}

#[cfg(feature = "mongodb")]
async fn connect_mongodb(dsn: &str, config: &ServerConfig) -> Storage {
    use folio_mongodb::MongoDbStoreBuilder;

    let backend = match MongoDbStoreBuilder::new(dsn, &config.database_name)
        .server_selection_timeout(config.database_timeout())
        .build()
        .await
    {
        Ok(backend) => backend,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid MongoDB configuration, serving demo content");
            return Storage::Unavailable;
        }
    };

    let store = DocumentStore::new(backend);

    match store.list_collection_names().await {
        Ok(collections) => {
            tracing::info!(
                database = %config.database_name,
                collections = collections.len(),
                "Connected to MongoDB"
            );
            Storage::from(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "MongoDB unreachable, serving demo content");
            if let Err(e) = store.shutdown().await {
                tracing::debug!(error = %e, "MongoDB client shutdown failed");
            }
            Storage::Unavailable
        }
    }
}

#[cfg(not(feature = "mongodb"))]
async fn connect_mongodb(_dsn: &str, _config: &ServerConfig) -> Storage {
    tracing::warn!("Built without MongoDB support, serving demo content");
    Storage::Unavailable
}
