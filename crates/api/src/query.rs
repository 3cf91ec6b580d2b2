//! Shared query parameter types for handlers.

use lumen_core::listing::{Page, PhotoQuery};
use serde::Deserialize;

/// `?skip=&take=&search=` for the photo listing endpoint.
///
/// Values are clamped by [`Page::new`]; an absent or blank `search` selects
/// the plain listing.
#[derive(Debug, Deserialize)]
pub struct ListPhotosParams {
    pub skip: Option<i64>,
    pub take: Option<i64>,
    pub search: Option<String>,
}

impl ListPhotosParams {
    pub fn page(&self) -> Page {
        Page::new(self.skip, self.take)
    }

    pub fn query(&self) -> PhotoQuery {
        PhotoQuery::from_search(self.search.as_deref())
    }
}

/// `?search=` for the count endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> PhotoQuery {
        PhotoQuery::from_search(self.search.as_deref())
    }
}

/// `?q=&page=` for the HTML search results page. `page` is 1-based.
#[derive(Debug, Deserialize)]
pub struct SearchPageParams {
    pub q: Option<String>,
    pub page: Option<i64>,
}

impl SearchPageParams {
    pub fn page_number(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn query(&self) -> PhotoQuery {
        PhotoQuery::from_search(self.q.as_deref())
    }
}
