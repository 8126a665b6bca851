//! Service layer for the digest builder.
//!
//! This module contains the business logic for:
//! - Listing page parsing (`ListingParser`)
//! - Text normalization outside math (`normalize`)
//! - Priority bucketing (`classify`)
//! - HTML page rendering (`render_page`)

pub mod classify;
pub mod listing;
pub mod normalizer;
pub mod render;

pub use classify::{Buckets, Section, classify};
pub use listing::{ListingParser, extract_codes};
pub use normalizer::{Span, normalize, partition};
pub use render::{Page, escape_html, nice_date, ordinal_day, render_page};
