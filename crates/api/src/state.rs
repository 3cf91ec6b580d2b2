use std::sync::Arc;

use lumen_core::creations::Creations;
use lumen_db::store::PhotoStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Photo query layer, built once at startup around the database pool.
    pub photos: Arc<dyn PhotoStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Curated landing page grid.
    pub creations: Arc<Creations>,
}
