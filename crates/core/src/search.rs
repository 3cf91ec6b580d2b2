//! Full-text search and pagination helpers.
//!
//! Pure functions only: the storage layer turns the output of
//! [`build_tsquery`] into a `to_tsquery('english', $1)` argument.

/// Text search configuration; must match the one used by the
/// `photos.search_vector` generated column.
pub const TEXT_SEARCH_CONFIG: &str = "english";

/// Stop words of the PostgreSQL `english` configuration. They are never
/// indexed, so a term from this list can never match.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she",
    "should", "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Whether `word` is dropped by the `english` text search configuration.
pub fn is_stop_word(word: &str) -> bool {
    ENGLISH_STOP_WORDS
        .iter()
        .any(|stop| stop.eq_ignore_ascii_case(word))
}

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of photos per page when `take` is omitted.
pub const DEFAULT_TAKE: i64 = 20;

/// Maximum number of photos a single request may ask for.
pub const MAX_TAKE: i64 = 100;

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Sanitize user input into a list of terms suitable for tsquery construction.
///
/// Splits on every non-alphanumeric character, so
/// tsquery operators (`&`, `|`, `!`, `:`, parentheses) never reach the
/// database. Stop words are dropped. Returns `None` if the input yields no
/// usable terms.
fn sanitize_terms(query: &str) -> Option<Vec<&str>> {
    let terms: Vec<&str> = query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty() && !is_stop_word(t))
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Sanitize and convert user input into a PostgreSQL `tsquery` string.
///
/// Terms are joined with `|` so a photo matching any term is returned;
/// photos matching more terms score higher under `ts_rank`.
///
/// # Examples
///
/// ```
/// use lumen_core::search::build_tsquery;
/// assert_eq!(build_tsquery("red fox"), Some("red | fox".to_string()));
/// assert_eq!(build_tsquery("  "), None);
/// ```
pub fn build_tsquery(query: &str) -> Option<String> {
    sanitize_terms(query).map(|terms| terms.join(" | "))
}

/// Lower-cased search terms, used by stores that match text in process.
pub fn search_terms(query: &str) -> Vec<String> {
    sanitize_terms(query)
        .unwrap_or_default()
        .into_iter()
        .map(str::to_lowercase)
        .collect()
}

/// Clamp a user-provided `take` to `[0, MAX_TAKE]`, defaulting when absent.
pub fn clamp_take(take: Option<i64>) -> i64 {
    take.unwrap_or(DEFAULT_TAKE).clamp(0, MAX_TAKE)
}

/// Clamp a user-provided `skip` to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
