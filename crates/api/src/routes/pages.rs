//! HTML page routes, mounted at the root.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// ```text
/// GET    /                      -> landing
/// GET    /search                -> search_page     (?q=&page=)
/// GET    /photo/{id}            -> photo_page
/// GET    /photo/{id}/download   -> download_photo  (303 to the image)
/// GET    /sitemap.xml           -> sitemap
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::landing))
        .route("/search", get(pages::search_page))
        .route("/photo/{id}", get(pages::photo_page))
        .route("/photo/{id}/download", get(pages::download_photo))
        .route("/sitemap.xml", get(pages::sitemap))
}
