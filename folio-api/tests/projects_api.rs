//! Integration tests for `GET /projects`.

mod common;

use axum::http::StatusCode;
use bson::{Bson, doc};
use common::{body_json, get};
use serde_json::Value;

async fn seeded_app() -> axum::Router {
    let (app, store) = common::memory_app();
    common::seed(
        &store,
        "project",
        vec![
            doc! { "title": "Loft", "category": "Home", "featured": true },
            doc! { "title": "Studio", "category": "Office", "featured": false },
            doc! { "title": "Cabin", "category": "Home", "featured": false },
        ],
    )
    .await;

    app
}

fn titles(json: &Value) -> Vec<&str> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|project| project["title"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Demo mode
// ---------------------------------------------------------------------------

#[tokio::test]
async fn without_store_returns_demo_projects_and_ignores_filters() {
    let response = get(common::unavailable_app(), "/projects?category=Office&featured=false&limit=1").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        titles(&json),
        vec![
            "Warm Minimalist Living Room",
            "Contemporary Workspace",
            "Handcrafted Oak Dining Table",
        ]
    );
    assert_eq!(json[0]["images"].as_array().unwrap().len(), 2);
    assert_eq!(json[0]["featured"], true);
    assert_eq!(json[1]["category"], "Office");
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn no_filters_return_everything() {
    let json = body_json(get(seeded_app().await, "/projects").await).await;

    assert_eq!(titles(&json), vec!["Loft", "Studio", "Cabin"]);
}

#[tokio::test]
async fn category_filter_matches_exactly() {
    let json = body_json(get(seeded_app().await, "/projects?category=Home").await).await;

    assert_eq!(titles(&json), vec!["Loft", "Cabin"]);
}

#[tokio::test]
async fn featured_false_returns_only_non_featured() {
    let json = body_json(get(seeded_app().await, "/projects?featured=false").await).await;

    assert_eq!(titles(&json), vec!["Studio", "Cabin"]);
    assert!(json.as_array().unwrap().iter().all(|p| p["featured"] == false));
}

#[tokio::test]
async fn featured_accepts_single_letter_flags() {
    let no = body_json(get(seeded_app().await, "/projects?featured=n").await).await;
    let yes = body_json(get(seeded_app().await, "/projects?featured=T").await).await;

    assert_eq!(titles(&no), vec!["Studio", "Cabin"]);
    assert_eq!(titles(&yes), vec!["Loft"]);
}

#[tokio::test]
async fn filters_combine() {
    let json = body_json(get(seeded_app().await, "/projects?category=Home&featured=yes").await).await;

    assert_eq!(titles(&json), vec!["Loft"]);
}

#[tokio::test]
async fn empty_category_is_no_constraint() {
    let json = body_json(get(seeded_app().await, "/projects?category=").await).await;

    assert_eq!(json.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn limit_caps_results() {
    let one = body_json(get(seeded_app().await, "/projects?limit=1").await).await;
    let none = body_json(get(seeded_app().await, "/projects?limit=0").await).await;

    assert_eq!(titles(&one), vec!["Loft"]);
    assert_eq!(none, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Queries reaching the backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn explicit_false_reaches_the_backend() {
    let (app, backend) = common::recording_app();

    let response = get(app, "/projects?featured=false").await;
    assert_eq!(response.status(), StatusCode::OK);

    let queries = backend.queries.read().await;
    let (collection, query) = &queries[0];
    let filter = query.filter.as_ref().unwrap();

    assert_eq!(collection, "project");
    assert_eq!(query.limit, Some(50));
    assert_eq!(filter.required_value("featured"), Some(&Bson::Boolean(false)));
}

#[tokio::test]
async fn omitted_featured_is_absent_from_the_query() {
    let (app, backend) = common::recording_app();

    get(app, "/projects?category=Home").await;

    let queries = backend.queries.read().await;
    let filter = queries[0].1.filter.as_ref().unwrap();

    assert_eq!(filter.required_value("featured"), None);
    assert_eq!(filter.required_value("category"), Some(&Bson::String("Home".into())));
}

#[tokio::test]
async fn no_params_send_no_filter() {
    let (app, backend) = common::recording_app();

    get(app, "/projects").await;

    assert_eq!(backend.queries.read().await[0].1.filter, None);
}

// ---------------------------------------------------------------------------
// Read defaults and bad records
// ---------------------------------------------------------------------------

#[tokio::test]
async fn stored_projects_take_read_defaults() {
    let (app, store) = common::memory_app();
    common::seed(&store, "project", vec![doc! { "description": "bare" }]).await;

    let json = body_json(get(app, "/projects").await).await;

    assert_eq!(
        json,
        serde_json::json!([{
            "title": "",
            "category": "Home",
            "description": "bare",
            "images": [],
            "featured": false,
        }])
    );
}

#[tokio::test]
async fn undecodable_record_is_a_server_error() {
    let (app, store) = common::memory_app();
    common::seed(&store, "project", vec![doc! { "title": "Loft", "images": "one.jpg" }]).await;

    let response = get(app, "/projects").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_json(response).await["detail"].is_string());
}

#[tokio::test]
async fn storage_failure_is_a_server_error() {
    let response = get(common::failing_app(), "/projects").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body_json(response).await["detail"]
            .as_str()
            .unwrap()
            .contains("connection reset")
    );
}

// ---------------------------------------------------------------------------
// Query parameter validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_params_are_rejected() {
    for uri in ["/projects?limit=abc", "/projects?limit=-1", "/projects?featured=maybe"] {
        let response = get(seeded_app().await, uri).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert!(body_json(response).await["detail"].is_string(), "{uri}");
    }
}

#[tokio::test]
async fn unknown_params_are_ignored() {
    let response = get(seeded_app().await, "/projects?sort=title&page=2").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 3);
}
