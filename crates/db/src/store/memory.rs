use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use lumen_core::listing::{Page, PhotoQuery};
use lumen_core::search::search_terms;
use lumen_core::types::DbId;
use tokio::sync::RwLock;

use super::PhotoStore;
use crate::models::photo::{
    CreatePhoto, Photo, PhotoDetail, PhotoIndexEntry, PhotoListRow, PhotoSummary,
};

/// Weight of a term hit in an asset path relative to a hit in the prompt.
const ASSET_PATH_WEIGHT: f32 = 0.1;

/// In-process [`PhotoStore`] used by tests.
///
/// Relevance is a term-frequency score over the text fields the PostgreSQL
/// index covers, with prompt hits outweighing asset-path hits. Both prompts
/// and asset paths are split into words and search terms exclude the
/// `english` stop words, as in the database. Words are compared exactly:
/// there is no stemming, so `dragons` does not match `dragon` here.
#[derive(Debug, Default)]
pub struct MemoryPhotoStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    photos: BTreeMap<DbId, Photo>,
}

impl MemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a photo, assigning the next id.
    pub async fn insert(&self, input: CreatePhoto) -> Photo {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let photo = Photo {
            id: inner.next_id,
            prompt: input.prompt,
            display_image: input.display_image,
            thumbnail_image: input.thumbnail_image,
            height: input.height,
            width: input.width,
            size: input.size,
            download: input.download.unwrap_or(0),
            created_at: Utc::now(),
        };
        inner.photos.insert(photo.id, photo.clone());
        photo
    }
}

/// Most downloaded first, ties by ascending id.
fn by_downloads(a: &Photo, b: &Photo) -> Ordering {
    b.download.cmp(&a.download).then(a.id.cmp(&b.id))
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn relevance(photo: &Photo, terms: &[String]) -> f32 {
    let hits = |text: &str| -> f32 {
        tokens(text)
            .filter(|token| terms.iter().any(|term| term == token))
            .count() as f32
    };

    hits(&photo.prompt)
        + ASSET_PATH_WEIGHT * (hits(&photo.display_image) + hits(&photo.thumbnail_image))
}

/// Matching photos with their scores, best match first.
fn ranked<'a>(photos: impl Iterator<Item = &'a Photo>, text: &str) -> Vec<(&'a Photo, f32)> {
    let terms = search_terms(text);
    let mut scored: Vec<(&Photo, f32)> = photos
        .map(|photo| (photo, relevance(photo, &terms)))
        .filter(|(_, score)| *score > 0.0)
        .collect();

    scored.sort_by(|(a, sa), (b, sb)| {
        sb.partial_cmp(sa)
            .unwrap_or(Ordering::Equal)
            .then(a.id.cmp(&b.id))
    });
    scored
}

fn window<T>(items: Vec<T>, page: Page) -> impl Iterator<Item = T> {
    items
        .into_iter()
        .skip(page.skip as usize)
        .take(page.take as usize)
}

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    async fn list(&self, query: &PhotoQuery, page: Page) -> Result<Vec<PhotoSummary>, sqlx::Error> {
        let inner = self.inner.read().await;

        let rows: Vec<PhotoListRow> = match query {
            PhotoQuery::PlainListing => {
                let mut photos: Vec<&Photo> = inner.photos.values().collect();
                photos.sort_by(|a, b| by_downloads(a, b));
                window(photos, page).map(PhotoListRow::from).collect()
            }
            PhotoQuery::RankedSearch { text, .. } => {
                let mut page_rows: Vec<(&Photo, f32)> =
                    window(ranked(inner.photos.values(), text), page).collect();
                page_rows.sort_by(|(a, sa), (b, sb)| {
                    b.download
                        .cmp(&a.download)
                        .then(sb.partial_cmp(sa).unwrap_or(Ordering::Equal))
                        .then(a.id.cmp(&b.id))
                });
                page_rows
                    .into_iter()
                    .map(|(photo, _)| PhotoListRow::from(photo))
                    .collect()
            }
        };

        Ok(rows.into_iter().map(PhotoSummary::from).collect())
    }

    async fn list_ids_and_prompts(&self) -> Result<Vec<PhotoIndexEntry>, sqlx::Error> {
        let inner = self.inner.read().await;
        let mut photos: Vec<&Photo> = inner.photos.values().collect();
        photos.sort_by(|a, b| by_downloads(a, b));
        Ok(photos
            .into_iter()
            .map(|p| PhotoIndexEntry {
                id: p.id,
                prompt: p.prompt.clone(),
            })
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<PhotoDetail>, sqlx::Error> {
        let inner = self.inner.read().await;
        Ok(inner.photos.get(&id).map(PhotoDetail::from))
    }

    async fn count(&self, query: &PhotoQuery) -> Result<i64, sqlx::Error> {
        let inner = self.inner.read().await;
        let total = match query {
            PhotoQuery::PlainListing => inner.photos.len(),
            PhotoQuery::RankedSearch { text, .. } => ranked(inner.photos.values(), text).len(),
        };
        Ok(total as i64)
    }

    async fn increment_download(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut inner = self.inner.write().await;
        match inner.photos.get_mut(&id) {
            Some(photo) => {
                photo.download += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}
