//! Pipeline entry points.
//!
//! - `run_digest`: Fetch listings and write the Priority, Main and Interest pages

pub mod digest;

pub use digest::{DigestSummary, run_digest};
