use async_trait::async_trait;
use lumen_core::listing::{Page, PhotoQuery};
use lumen_core::types::DbId;

use super::PhotoStore;
use crate::models::photo::{PhotoDetail, PhotoIndexEntry, PhotoSummary};
use crate::repositories::PhotoRepo;
use crate::DbPool;

/// [`PhotoStore`] backed by PostgreSQL through [`PhotoRepo`].
#[derive(Debug, Clone)]
pub struct PgPhotoStore {
    pool: DbPool,
}

impl PgPhotoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoStore for PgPhotoStore {
    async fn list(&self, query: &PhotoQuery, page: Page) -> Result<Vec<PhotoSummary>, sqlx::Error> {
        tracing::debug!(
            search = ?query.search_text(),
            skip = page.skip,
            take = page.take,
            "Listing photos",
        );
        PhotoRepo::list(&self.pool, query, page).await
    }

    async fn list_ids_and_prompts(&self) -> Result<Vec<PhotoIndexEntry>, sqlx::Error> {
        PhotoRepo::list_ids_and_prompts(&self.pool).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<PhotoDetail>, sqlx::Error> {
        PhotoRepo::find_by_id(&self.pool, id).await
    }

    async fn count(&self, query: &PhotoQuery) -> Result<i64, sqlx::Error> {
        PhotoRepo::count(&self.pool, query).await
    }

    async fn increment_download(&self, id: DbId) -> Result<bool, sqlx::Error> {
        PhotoRepo::increment_download(&self.pool, id).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
