pub mod health;
pub mod pages;
pub mod photos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /photos                     list, count, index, detail, download counter
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/photos", photos::router())
}

/// Browser-facing pages served from the root.
pub fn page_routes() -> Router<AppState> {
    pages::router()
}
