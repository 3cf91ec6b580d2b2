//! Photo entity models and DTOs.
//!
//! Storage rows use snake_case column names; everything that leaves the
//! server is serialized in camelCase (`displayImage`, `thumbnailImage`, ...).

use lumen_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Photo
// ---------------------------------------------------------------------------

/// A full row from the `photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: DbId,
    pub prompt: String,
    pub display_image: String,
    pub thumbnail_image: String,
    pub height: i32,
    pub width: i32,
    pub size: i64,
    pub download: i64,
    pub created_at: Timestamp,
}

/// DTO for inserting a photo (ingestion tooling and tests).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhoto {
    pub prompt: String,
    pub display_image: String,
    pub thumbnail_image: String,
    pub height: i32,
    pub width: i32,
    pub size: i64,
    /// Defaults to 0 if omitted.
    pub download: Option<i64>,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Internal row produced by both listing strategies.
///
/// Carries `download` so the ranked search can order its page; it never
/// reaches the API, see [`PhotoSummary`].
#[derive(Debug, Clone, FromRow)]
pub struct PhotoListRow {
    pub id: DbId,
    pub prompt: String,
    pub display_image: String,
    pub height: i32,
    pub width: i32,
    pub size: i64,
    pub thumbnail_image: String,
    pub download: i64,
}

impl From<&Photo> for PhotoListRow {
    fn from(photo: &Photo) -> Self {
        Self {
            id: photo.id,
            prompt: photo.prompt.clone(),
            display_image: photo.display_image.clone(),
            height: photo.height,
            width: photo.width,
            size: photo.size,
            thumbnail_image: photo.thumbnail_image.clone(),
            download: photo.download,
        }
    }
}

/// Public projection returned by List/Search, identical for both strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoSummary {
    pub id: DbId,
    pub prompt: String,
    pub display_image: String,
    pub height: i32,
    pub width: i32,
    pub size: i64,
    pub thumbnail_image: String,
}

/// The single storage → public mapping shared by every listing strategy.
impl From<PhotoListRow> for PhotoSummary {
    fn from(row: PhotoListRow) -> Self {
        Self {
            id: row.id,
            prompt: row.prompt,
            display_image: row.display_image,
            height: row.height,
            width: row.width,
            size: row.size,
            thumbnail_image: row.thumbnail_image,
        }
    }
}

// ---------------------------------------------------------------------------
// Index and detail
// ---------------------------------------------------------------------------

/// Lightweight `{ id, prompt }` pair for the sitemap and client-side indexes.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct PhotoIndexEntry {
    pub id: DbId,
    pub prompt: String,
}

/// Full detail for a single photo page.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoDetail {
    pub display_image: String,
    pub thumbnail_image: String,
    pub prompt: String,
    pub height: i32,
    pub width: i32,
    pub size: i64,
    pub download: i64,
}

impl From<&Photo> for PhotoDetail {
    fn from(photo: &Photo) -> Self {
        Self {
            display_image: photo.display_image.clone(),
            thumbnail_image: photo.thumbnail_image.clone(),
            prompt: photo.prompt.clone(),
            height: photo.height,
            width: photo.width,
            size: photo.size,
            download: photo.download,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> PhotoListRow {
        PhotoListRow {
            id: 7,
            prompt: "a lighthouse in a storm".into(),
            display_image: "/photos/7.webp".into(),
            height: 1024,
            width: 768,
            size: 204_800,
            thumbnail_image: "/thumbs/7.webp".into(),
            download: 99,
        }
    }

    #[test]
    fn summary_serializes_public_field_names() {
        let json = serde_json::to_value(PhotoSummary::from(row())).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["displayImage"], "/photos/7.webp");
        assert_eq!(json["thumbnailImage"], "/thumbs/7.webp");
        assert_eq!(json["height"], 1024);
        assert_eq!(json["width"], 768);
        assert_eq!(json["size"], 204_800);
    }

    #[test]
    fn summary_strips_download() {
        let json = serde_json::to_value(PhotoSummary::from(row())).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("download"));
        assert_eq!(object.len(), 7);
    }

    #[test]
    fn detail_keeps_download_count() {
        let detail = PhotoDetail {
            display_image: "/photos/1.webp".into(),
            thumbnail_image: "/thumbs/1.webp".into(),
            prompt: "p".into(),
            height: 1,
            width: 1,
            size: 1,
            download: 12,
        };
        let json = serde_json::to_value(detail).unwrap();
        assert_eq!(json["download"], 12);
        assert!(json.get("id").is_none());
    }
}
