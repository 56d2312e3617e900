use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::{Json, Router, routing::get};
use bson::doc;

use folio_core::{document::Document, error::StoreResult};
use folio_schema::{Project, Record};

use crate::demo::demo_projects;
use crate::error::{AppError, AppResult};
use crate::query::{ProjectParams, non_empty, parse_flag, parse_limit};
use crate::state::AppState;

const DEFAULT_LIMIT: usize = 50;

/// GET /projects -- lists projects, optionally filtered by category and featured flag.
///
/// Without a store the demo projects are returned and the filters are ignored.
async fn list_projects(
    State(state): State<AppState>,
    params: Result<Query<ProjectParams>, QueryRejection>,
) -> AppResult<Json<Vec<Project>>> {
    let Query(params) = params.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let limit = parse_limit(params.limit.as_deref(), DEFAULT_LIMIT)?;
    let featured = parse_flag("featured", params.featured.as_deref())?;

    let Some(store) = state.storage.available() else {
        return Ok(Json(demo_projects()));
    };

    let mut filter = doc! {};
    if let Some(category) = non_empty(params.category.as_deref()) {
        filter.insert("category", category);
    }
    if let Some(featured) = featured {
        filter.insert("featured", featured);
    }

    tracing::debug!(?filter, limit, "Listing projects");

    let projects = store
        .get_documents(Project::collection_name(), filter, limit)
        .await?
        .into_iter()
        .map(Project::from_stored)
        .collect::<StoreResult<Vec<_>>>()?;

    Ok(Json(projects))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/projects", get(list_projects))
}
