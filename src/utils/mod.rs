//! Utility functions and helpers.

pub mod http;

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::Result;

static ARXIV_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/abs/(\d{4}\.\d{5}(?:v\d+)?)").expect("arXiv id pattern is valid")
});

/// Build the new-submissions listing URL for a category.
pub fn listing_url(base_url: &str, category: &str) -> Result<Url> {
    let url = format!("{}/list/{}/new", base_url.trim_end_matches('/'), category);
    Ok(Url::parse(&url)?)
}

/// Extract an arXiv identifier (with optional version) from a link target.
///
/// The identifier must directly follow `/abs/`.
pub fn extract_arxiv_id(href: &str) -> Option<&str> {
    ARXIV_ID_RE
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_url() {
        assert_eq!(
            listing_url("https://arxiv.org", "astro-ph").unwrap().as_str(),
            "https://arxiv.org/list/astro-ph/new"
        );
        assert_eq!(
            listing_url("https://export.arxiv.org/", "physics.hist-ph")
                .unwrap()
                .as_str(),
            "https://export.arxiv.org/list/physics.hist-ph/new"
        );
        assert!(listing_url("no scheme", "astro-ph").is_err());
    }

    #[test]
    fn test_extract_arxiv_id() {
        assert_eq!(extract_arxiv_id("/abs/2410.01234"), Some("2410.01234"));
        assert_eq!(extract_arxiv_id("/abs/2410.01234v12"), Some("2410.01234v12"));
        assert_eq!(
            extract_arxiv_id("https://arxiv.org/abs/2501.00001v1"),
            Some("2501.00001v1")
        );
        assert_eq!(extract_arxiv_id("/abs/astro-ph/0601001"), None);
        assert_eq!(extract_arxiv_id("/abs/"), None);
        assert_eq!(extract_arxiv_id("/abs/12345.67890"), None);
        assert_eq!(extract_arxiv_id("/pdf/2410.01234"), None);
    }
}
