//! The storage seam handlers depend on.
//!
//! [`PgPhotoStore`] is the production implementation; it is built once at
//! startup around the shared pool and injected into the HTTP state.
//! [`MemoryPhotoStore`] keeps the same contract in process for tests.

use async_trait::async_trait;
use lumen_core::listing::{Page, PhotoQuery};
use lumen_core::types::DbId;

use crate::models::photo::{PhotoDetail, PhotoIndexEntry, PhotoSummary};

mod memory;
mod postgres;

pub use memory::MemoryPhotoStore;
pub use postgres::PgPhotoStore;

/// Read and counter operations over the photo collection.
///
/// Errors are storage errors only; "not found" is reported through the
/// return value (`None` / `false`), never as an error.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// List one page, plain or ranked depending on `query`.
    async fn list(&self, query: &PhotoQuery, page: Page) -> Result<Vec<PhotoSummary>, sqlx::Error>;

    /// Every `{ id, prompt }`, most downloaded first.
    async fn list_ids_and_prompts(&self) -> Result<Vec<PhotoIndexEntry>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<PhotoDetail>, sqlx::Error>;

    /// Search matches for a ranked query, collection size otherwise.
    async fn count(&self, query: &PhotoQuery) -> Result<i64, sqlx::Error>;

    /// Add one to the download counter. `false` when `id` does not exist.
    async fn increment_download(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Verify the backing storage is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}
