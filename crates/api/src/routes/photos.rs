//! Photo query routes, mounted at `/api/v1/photos`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::photos;
use crate::state::AppState;

/// ```text
/// GET    /                 -> list_photos      (?skip=&take=&search=)
/// GET    /count            -> count_photos     (?search=)
/// GET    /index            -> photo_index
/// GET    /{id}             -> get_photo
/// POST   /{id}/download    -> record_download
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(photos::list_photos))
        .route("/count", get(photos::count_photos))
        .route("/index", get(photos::photo_index))
        .route("/{id}", get(photos::get_photo))
        .route("/{id}/download", post(photos::record_download))
}
