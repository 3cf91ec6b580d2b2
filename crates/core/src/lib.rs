//! Domain building blocks for the Lumen gallery.
//!
//! This crate has no internal dependencies so it can be shared by the
//! storage layer, the HTTP server, and any ingestion tooling.

pub mod creations;
pub mod error;
pub mod listing;
pub mod search;
pub mod types;
