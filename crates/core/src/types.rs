/// Photo identifiers are PostgreSQL BIGSERIAL keys.
pub type DbId = i64;

/// Ingestion timestamps, always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
