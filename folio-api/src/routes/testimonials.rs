use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::{Json, Router, routing::get};
use bson::doc;

use folio_core::{document::Document, error::StoreResult};
use folio_schema::{Record, Testimonial};

use crate::demo::demo_testimonials;
use crate::error::{AppError, AppResult};
use crate::query::{LimitParams, parse_limit};
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 20;

/// GET /testimonials -- lists testimonials; the demo pair without a store.
async fn list_testimonials(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let limit = parse_limit(params.limit.as_deref(), DEFAULT_LIMIT)?;

    let Some(store) = state.storage.available() else {
        return Ok(Json(demo_testimonials()));
    };

    let testimonials = store
        .get_documents(Testimonial::collection_name(), doc! {}, limit)
        .await?
        .into_iter()
        .map(Testimonial::from_stored)
        .collect::<StoreResult<Vec<_>>>()?;

    Ok(Json(testimonials))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/testimonials", get(list_testimonials))
}
