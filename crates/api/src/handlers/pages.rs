//! Browser-facing pages. Failures render as HTML via [`PageError`].

use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse, Redirect};
use lumen_core::error::CoreError;
use lumen_core::listing::Page;
use lumen_core::types::DbId;

use crate::error::{PageError, PageResult};
use crate::query::SearchPageParams;
use crate::render::{self, SearchResults};
use crate::state::AppState;

fn photo_not_found(id: DbId) -> PageError {
    PageError::from(CoreError::NotFound {
        entity: "Photo",
        id,
    })
}

/// GET /
pub async fn landing(State(state): State<AppState>) -> Html<String> {
    render::into_html(render::landing(&state.creations))
}

/// GET /search?q=&page=
///
/// Uses the same query layer as the JSON API; the page count comes from
/// `count`, which is the whole collection when `q` is blank.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchPageParams>,
) -> PageResult<Html<String>> {
    let query = params.query();
    let number = params.page_number();
    let page_size = state.config.page_size;

    let (photos, total) = tokio::try_join!(
        state.photos.list(&query, Page::numbered(number, page_size)),
        state.photos.count(&query),
    )?;

    let results = SearchResults {
        query: query.search_text(),
        photos: &photos,
        total,
        page: number,
        page_size,
    };

    Ok(render::into_html(render::search_results(&results)))
}

/// GET /photo/{id}
pub async fn photo_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Html<String>> {
    let photo = state
        .photos
        .find_by_id(id)
        .await?
        .ok_or_else(|| photo_not_found(id))?;

    Ok(render::into_html(render::photo_detail(id, &photo)))
}

/// GET /photo/{id}/download
///
/// Counts the download, then sends the browser to the full-size image.
pub async fn download_photo(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> PageResult<Redirect> {
    let photo = state
        .photos
        .find_by_id(id)
        .await?
        .ok_or_else(|| photo_not_found(id))?;

    if !state.photos.increment_download(id).await? {
        return Err(photo_not_found(id));
    }

    tracing::info!(photo_id = id, "Download recorded");
    Ok(Redirect::to(&photo.display_image))
}

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> PageResult<impl IntoResponse> {
    let entries = state.photos.list_ids_and_prompts().await?;
    let xml = render::sitemap(&state.config.public_base_url, &entries);
    Ok(([(CONTENT_TYPE, "application/xml")], xml))
}
