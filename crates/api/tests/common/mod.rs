#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use lumen_core::creations::Creations;
use lumen_core::listing::{Page, PhotoQuery};
use lumen_core::types::DbId;
use lumen_db::models::photo::{
    CreatePhoto, Photo, PhotoDetail, PhotoIndexEntry, PhotoSummary,
};
use lumen_db::store::{MemoryPhotoStore, PhotoStore};
use tower::ServiceExt;

use lumen_api::config::ServerConfig;
use lumen_api::router::build_app_router;
use lumen_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:3000` as CORS origin and a page size of 2 so
/// pagination shows up with a handful of photos.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:3000")],
        request_timeout_secs: 30,
        db_max_connections: 5,
        public_dir: PathBuf::from("public"),
        public_base_url: "https://lumen.test".to_string(),
        page_size: 2,
        creations_path: None,
    }
}

pub fn test_creations() -> Creations {
    Creations::from_json(
        r#"[
            [{"alt": "neon city at night", "url": "neon-city.webp"}],
            [{"alt": "glass jellyfish", "url": "jellyfish.webp"}]
        ]"#,
    )
    .unwrap()
}

/// Full application router, same middleware stack as production.
pub fn build_test_app(photos: Arc<dyn PhotoStore>) -> Router {
    build_test_app_with_config(photos, test_config())
}

pub fn build_test_app_with_config(photos: Arc<dyn PhotoStore>, config: ServerConfig) -> Router {
    let state = AppState {
        photos,
        config: Arc::new(config.clone()),
        creations: Arc::new(test_creations()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub fn new_photo(prompt: &str, download: i64) -> CreatePhoto {
    let slug = prompt.len();
    CreatePhoto {
        prompt: prompt.to_string(),
        display_image: format!("/full/{slug}.webp"),
        thumbnail_image: format!("/thumb/{slug}.webp"),
        height: 768,
        width: 512,
        size: 1_572_864,
        download: Some(download),
    }
}

/// P1 (5 downloads), P2 (10), P3 (1). "dragon" matches P1 and P3, with P3
/// the stronger match.
pub async fn seed_gallery(store: &MemoryPhotoStore) -> (Photo, Photo, Photo) {
    let p1 = store.insert(new_photo("a red dragon over the sea", 5)).await;
    let p2 = store.insert(new_photo("quiet forest at dawn", 10)).await;
    let p3 = store
        .insert(new_photo("red dragon guarding a red dragon egg", 1))
        .await;
    (p1, p2, p3)
}

pub async fn seeded_store() -> (Arc<MemoryPhotoStore>, (Photo, Photo, Photo)) {
    let store = Arc::new(MemoryPhotoStore::new());
    let photos = seed_gallery(&store).await;
    (store, photos)
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// Store whose every call fails as if the pool were exhausted.
pub struct UnavailableStore;

#[async_trait]
impl PhotoStore for UnavailableStore {
    async fn list(&self, _: &PhotoQuery, _: Page) -> Result<Vec<PhotoSummary>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn list_ids_and_prompts(&self) -> Result<Vec<PhotoIndexEntry>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn find_by_id(&self, _: DbId) -> Result<Option<PhotoDetail>, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn count(&self, _: &PhotoQuery) -> Result<i64, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn increment_download(&self, _: DbId) -> Result<bool, sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Err(sqlx::Error::PoolTimedOut)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    send(app, Method::POST, uri).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
