//! JSON handlers for the photo query layer.
//!
//! Every listing shape comes from [`PhotoStore`](lumen_db::store::PhotoStore)
//! so ordering and projection stay identical across endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lumen_core::error::CoreError;
use lumen_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::extract::ApiQuery;
use crate::query::{ListPhotosParams, SearchParams};
use crate::response::{CountResponse, DataResponse};
use crate::state::AppState;

/// GET /api/v1/photos
///
/// Most downloaded first, or relevance-ranked when `search` carries at least
/// one usable term.
pub async fn list_photos(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListPhotosParams>,
) -> AppResult<impl IntoResponse> {
    let query = params.query();
    let page = params.page();

    let photos = state.photos.list(&query, page).await?;

    tracing::debug!(
        search = ?query.search_text(),
        skip = page.skip,
        take = page.take,
        returned = photos.len(),
        "Listed photos",
    );

    Ok(Json(DataResponse { data: photos }))
}

/// GET /api/v1/photos/count
///
/// Without a search this is the size of the whole collection.
pub async fn count_photos(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let total = state.photos.count(&params.query()).await?;
    Ok(Json(DataResponse {
        data: CountResponse { total },
    }))
}

/// GET /api/v1/photos/index
pub async fn photo_index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = state.photos.list_ids_and_prompts().await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/photos/{id}
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let photo = state
        .photos
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }))?;

    Ok(Json(DataResponse { data: photo }))
}

/// POST /api/v1/photos/{id}/download
///
/// Records one download. 204 on success, 404 for an unknown id.
pub async fn record_download(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !state.photos.increment_download(id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Photo",
            id,
        }));
    }

    tracing::info!(photo_id = id, "Download recorded");
    Ok(StatusCode::NO_CONTENT)
}
