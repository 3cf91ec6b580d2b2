//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod photo_repo;

pub use photo_repo::PhotoRepo;
