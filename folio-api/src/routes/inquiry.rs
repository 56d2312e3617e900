use axum::body::Bytes;
use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::Serialize;
use serde_json::Value;

use folio_schema::{Inquiry, Record};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Outcome of a submitted inquiry.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum InquiryResponse {
    /// Stored; `id` is the store-assigned identifier.
    Ok { id: String },
    /// Accepted without a store; the validated inquiry is echoed back.
    Received { data: Inquiry },
}

/// POST /inquiry -- validates and stores a contact inquiry.
///
/// The body is read as raw bytes so that malformed JSON is reported as 422 like any
/// other bad input, whatever the request's content type.
async fn create_inquiry(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<InquiryResponse>> {
    let raw: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::InvalidInput(format!("request body is not valid JSON: {e}")))?;

    let inquiry = Inquiry::parse(&raw)?;

    let Some(store) = state.storage.available() else {
        tracing::debug!("No store configured, inquiry accepted without persisting");
        return Ok(Json(InquiryResponse::Received { data: inquiry }));
    };

    let id = store.create_document(&inquiry).await?;
    tracing::info!(%id, source = %inquiry.source, "Inquiry stored");

    Ok(Json(InquiryResponse::Ok { id }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/inquiry", post(create_inquiry))
}
