//! Repository for the `photos` table.

use lumen_core::listing::{Page, PhotoQuery};
use lumen_core::search::TEXT_SEARCH_CONFIG;
use lumen_core::types::DbId;
use sqlx::PgPool;

use crate::models::photo::{
    CreatePhoto, Photo, PhotoDetail, PhotoIndexEntry, PhotoListRow, PhotoSummary,
};

/// Column list for full `Photo` rows.
const COLUMNS: &str = "\
    id, prompt, display_image, thumbnail_image, height, width, size, download, created_at";

/// Column list for `PhotoListRow`, shared by both listing strategies.
const LIST_COLUMNS: &str = "\
    id, prompt, display_image, height, width, size, thumbnail_image, download";

/// Column list for `PhotoDetail`.
const DETAIL_COLUMNS: &str = "\
    display_image, thumbnail_image, prompt, height, width, size, download";

/// Provides query and counter operations for photos.
pub struct PhotoRepo;

impl PhotoRepo {
    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// List one page of photos using the strategy selected by `query`.
    ///
    /// Both strategies produce [`PhotoListRow`]s that go through the same
    /// [`PhotoSummary`] mapping, so the output shape cannot drift.
    pub async fn list(
        pool: &PgPool,
        query: &PhotoQuery,
        page: Page,
    ) -> Result<Vec<PhotoSummary>, sqlx::Error> {
        if page.is_empty() {
            return Ok(Vec::new());
        }

        let rows = match query {
            PhotoQuery::PlainListing => Self::list_by_downloads(pool, page).await?,
            PhotoQuery::RankedSearch { tsquery, .. } => {
                Self::search_ranked(pool, tsquery, page).await?
            }
        };

        Ok(rows.into_iter().map(PhotoSummary::from).collect())
    }

    /// Whole collection ordered by downloads.
    async fn list_by_downloads(
        pool: &PgPool,
        page: Page,
    ) -> Result<Vec<PhotoListRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS} FROM photos
             ORDER BY download DESC, id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, PhotoListRow>(&query)
            .bind(page.take)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Relevance search: the inner query picks the page by `ts_rank`, the
    /// outer query reorders that page by downloads.
    async fn search_ranked(
        pool: &PgPool,
        tsquery: &str,
        page: Page,
    ) -> Result<Vec<PhotoListRow>, sqlx::Error> {
        let query = format!(
            "SELECT {LIST_COLUMNS} FROM (
                 SELECT {LIST_COLUMNS}, ts_rank(search_vector, q) AS score
                 FROM photos, to_tsquery('{TEXT_SEARCH_CONFIG}', $1) AS q
                 WHERE search_vector @@ q
                 ORDER BY score DESC, id ASC
                 LIMIT $2 OFFSET $3
             ) AS ranked
             ORDER BY download DESC, score DESC, id ASC"
        );
        sqlx::query_as::<_, PhotoListRow>(&query)
            .bind(tsquery)
            .bind(page.take)
            .bind(page.skip)
            .fetch_all(pool)
            .await
    }

    /// Every photo's id and prompt, most downloaded first. Unpaginated.
    pub async fn list_ids_and_prompts(pool: &PgPool) -> Result<Vec<PhotoIndexEntry>, sqlx::Error> {
        sqlx::query_as::<_, PhotoIndexEntry>(
            "SELECT id, prompt FROM photos ORDER BY download DESC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Counting
    // -----------------------------------------------------------------------

    /// Count photos for `query`.
    ///
    /// A ranked search counts its matches. A plain listing counts the whole
    /// table: no prompt filter is applied on that branch, which is not the
    /// same matching rule as the search branch.
    pub async fn count(pool: &PgPool, query: &PhotoQuery) -> Result<i64, sqlx::Error> {
        match query {
            PhotoQuery::PlainListing => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM photos")
                    .fetch_one(pool)
                    .await
            }
            PhotoQuery::RankedSearch { tsquery, .. } => {
                let query = format!(
                    "SELECT COUNT(*) FROM photos
                     WHERE search_vector @@ to_tsquery('{TEXT_SEARCH_CONFIG}', $1)"
                );
                sqlx::query_scalar::<_, i64>(&query)
                    .bind(tsquery)
                    .fetch_one(pool)
                    .await
            }
        }
    }

    // -----------------------------------------------------------------------
    // Single photo
    // -----------------------------------------------------------------------

    /// Find a photo's detail projection by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PhotoDetail>, sqlx::Error> {
        let query = format!("SELECT {DETAIL_COLUMNS} FROM photos WHERE id = $1");
        sqlx::query_as::<_, PhotoDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically add one to a photo's download counter.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn increment_download(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE photos SET download = download + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert a new photo, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePhoto) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos
                 (prompt, display_image, thumbnail_image, height, width, size, download)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(&input.prompt)
            .bind(&input.display_image)
            .bind(&input.thumbnail_image)
            .bind(input.height)
            .bind(input.width)
            .bind(input.size)
            .bind(input.download)
            .fetch_one(pool)
            .await
    }
}
