use folio_core::store::Storage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: a live store sits behind an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Storage capability, chosen once at startup.
    pub storage: Storage,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }
}
