use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Store probe response payload.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProbeResponse {
    /// The probe ran; `database` is `connected` or `disconnected`.
    Ok {
        database: &'static str,
        collections: Vec<String>,
    },
    /// The store was configured but the probe failed.
    Error { message: String },
}

/// GET /test -- reports whether a store is connected and what it holds.
///
/// Always answers 200; a failing probe is described in the body.
async fn probe(State(state): State<AppState>) -> Json<ProbeResponse> {
    let Some(store) = state.storage.available() else {
        return Json(ProbeResponse::Ok {
            database: "disconnected",
            collections: Vec::new(),
        });
    };

    match store.list_collection_names().await {
        Ok(collections) => Json(ProbeResponse::Ok {
            database: "connected",
            collections,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Store probe failed");
            Json(ProbeResponse::Error { message: e.to_string() })
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/test", get(probe))
}
