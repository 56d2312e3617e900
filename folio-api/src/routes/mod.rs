pub mod health;
pub mod inquiry;
pub mod projects;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the route tree.
///
/// ```text
/// /test              GET   store probe
/// /projects          GET   list projects
/// /testimonials      GET   list testimonials
/// /inquiry           POST  submit a contact inquiry
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(projects::router())
        .merge(testimonials::router())
        .merge(inquiry::router())
}
