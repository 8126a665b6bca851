// src/models/mod.rs

//! Domain models for the digest builder.

mod config;
mod entry;
mod selectors;

// Re-export all public types
pub use config::{Config, DigestConfig, FetchConfig, OutputConfig};
pub use entry::Entry;
pub use selectors::ListingSelectors;
