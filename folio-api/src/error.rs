use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use folio_core::error::StoreError;
use folio_schema::ValidationError;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a JSON body with a single `detail` key.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request input failed record validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The document store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request input could not be read at all (bad JSON, malformed query value).
    #[error("{0}")]
    InvalidInput(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, validation_detail(err)),
            AppError::InvalidInput(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Value::String(msg.clone()))
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, Value::String(err.to_string()))
            }
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}

/// One `{loc, msg, type}` entry per offending field.
fn validation_detail(err: &ValidationError) -> Value {
    err.errors()
        .iter()
        .map(|error| {
            let loc = if error.field == "body" {
                json!(["body"])
            } else {
                json!(["body", error.field])
            };

            json!({
                "loc": loc,
                "msg": error.violation.to_string(),
                "type": error.violation.code(),
            })
        })
        .collect()
}
