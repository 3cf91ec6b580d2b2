//! Listing strategies for the photo collection.
//!
//! Every list or count request is first turned into a [`PhotoQuery`], so the
//! storage layer dispatches on one tagged value instead of re-checking the
//! raw search string in each operation.

use crate::search::{build_tsquery, clamp_skip, clamp_take};

/// How a list or count request is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoQuery {
    /// Whole collection, most downloaded first.
    PlainListing,
    /// Relevance search: the page is chosen by search score, then ordered
    /// by downloads within the page.
    RankedSearch {
        /// Raw search text as typed by the user (trimmed).
        text: String,
        /// Sanitised `to_tsquery` argument built from `text`.
        tsquery: String,
    },
}

impl PhotoQuery {
    /// Pick the strategy for an optional search string.
    ///
    /// Absent, blank, or punctuation-only input means "no search" and is
    /// never an error.
    pub fn from_search(search: Option<&str>) -> Self {
        let Some(text) = search.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::PlainListing;
        };

        match build_tsquery(text) {
            Some(tsquery) => Self::RankedSearch {
                text: text.to_string(),
                tsquery,
            },
            None => Self::PlainListing,
        }
    }

    /// The trimmed search text, if this is a ranked search.
    pub fn search_text(&self) -> Option<&str> {
        match self {
            Self::PlainListing => None,
            Self::RankedSearch { text, .. } => Some(text),
        }
    }
}

/// Offset-based page over an already-ordered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub take: i64,
}

impl Page {
    /// Build a page from untrusted request values, clamping both bounds.
    pub fn new(skip: Option<i64>, take: Option<i64>) -> Self {
        Self {
            skip: clamp_skip(skip),
            take: clamp_take(take),
        }
    }

    /// Page `number` (1-based) of `size` items each.
    pub fn numbered(number: i64, size: i64) -> Self {
        let size = clamp_take(Some(size));
        Self {
            skip: (number.max(1) - 1).saturating_mul(size),
            take: size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.take == 0
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::search::{DEFAULT_TAKE, MAX_TAKE};

    #[test]
    fn absent_search_is_plain_listing() {
        assert_eq!(PhotoQuery::from_search(None), PhotoQuery::PlainListing);
    }

    #[test]
    fn blank_search_is_plain_listing() {
        assert_eq!(PhotoQuery::from_search(Some("")), PhotoQuery::PlainListing);
        assert_eq!(
            PhotoQuery::from_search(Some("   ")),
            PhotoQuery::PlainListing
        );
    }

    #[test]
    fn punctuation_only_search_is_plain_listing() {
        assert_eq!(
            PhotoQuery::from_search(Some("?!")),
            PhotoQuery::PlainListing
        );
    }

    #[test]
    fn search_builds_ranked_query() {
        let query = PhotoQuery::from_search(Some("  neon tiger "));
        assert_matches!(
            &query,
            PhotoQuery::RankedSearch { text, tsquery }
                if text == "neon tiger" && tsquery == "neon | tiger"
        );
        assert_eq!(query.search_text(), Some("neon tiger"));
    }

    #[test]
    fn page_defaults() {
        assert_eq!(
            Page::new(None, None),
            Page {
                skip: 0,
                take: DEFAULT_TAKE
            }
        );
    }

    #[test]
    fn page_clamps_untrusted_values() {
        let page = Page::new(Some(-1), Some(MAX_TAKE + 1));
        assert_eq!(page.skip, 0);
        assert_eq!(page.take, MAX_TAKE);
    }

    #[test]
    fn numbered_pages() {
        assert_eq!(Page::numbered(1, 24), Page { skip: 0, take: 24 });
        assert_eq!(Page::numbered(3, 24), Page { skip: 48, take: 24 });
        assert_eq!(Page::numbered(0, 24), Page { skip: 0, take: 24 });
    }

    #[test]
    fn zero_take_is_empty() {
        assert!(Page::new(Some(5), Some(0)).is_empty());
    }
}
