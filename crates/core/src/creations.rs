//! Curated "creations" shown on the landing page.
//!
//! The grid is static configuration: an ordered list of columns, each an
//! ordered list of `{ alt, url }` pairs. `url` is relative to
//! [`CREATIONS_ASSET_DIR`].

use serde::Deserialize;

use crate::error::CoreError;

/// Public asset directory every creation `url` is resolved against.
pub const CREATIONS_ASSET_DIR: &str = "/creations/";

/// One curated image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Creation {
    pub alt: String,
    pub url: String,
}

impl Creation {
    /// Absolute asset path used as the `<img src>`.
    pub fn src(&self) -> String {
        format!("{CREATIONS_ASSET_DIR}{}", self.url.trim_start_matches('/'))
    }
}

/// The full grid, column by column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Creations {
    columns: Vec<Vec<Creation>>,
}

impl Creations {
    /// Parse the JSON configuration artifact.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let creations: Self = serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("invalid creations file: {e}")))?;

        if let Some(bad) = creations.iter().find(|c| c.url.trim().is_empty()) {
            return Err(CoreError::Validation(format!(
                "creation '{}' has an empty url",
                bad.alt
            )));
        }

        Ok(creations)
    }

    pub fn columns(&self) -> &[Vec<Creation>] {
        &self.columns
    }

    /// All creations in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Creation> {
        self.columns.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
