//! Application configuration structures.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::ListingSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP fetch settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Listing page selectors
    #[serde(default)]
    pub listing: ListingSelectors,

    /// Categories and classification rules
    #[serde(default)]
    pub digest: DigestConfig,

    /// Where rendered pages are written
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.fetch.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetch.user_agent is empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(AppError::validation("fetch.timeout_secs must be > 0"));
        }
        url::Url::parse(&self.fetch.base_url)?;
        if self.digest.source_category.trim().is_empty() {
            return Err(AppError::validation("digest.source_category is empty"));
        }
        if self.digest.priority_codes.is_empty() {
            return Err(AppError::validation("No priority codes defined"));
        }
        if self.digest.priority_codes.iter().any(|c| c.trim().is_empty()) {
            return Err(AppError::validation("digest.priority_codes contains an empty code"));
        }
        if self.digest.interest_categories.iter().any(|c| c.trim().is_empty()) {
            return Err(AppError::validation(
                "digest.interest_categories contains an empty category",
            ));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Site root, used for listing and abstract URLs
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Which categories to fetch and how to bucket them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Category whose entries are split into Priority and Main
    #[serde(default = "defaults::source_category")]
    pub source_category: String,

    /// Subject codes that promote an entry to the Priority page, in order
    #[serde(default = "defaults::priority_codes")]
    pub priority_codes: Vec<String>,

    /// Categories listed on the Interest page, in order
    #[serde(default = "defaults::interest_categories")]
    pub interest_categories: Vec<String>,

    /// Section heading on the Main page
    #[serde(default = "defaults::main_heading")]
    pub main_heading: String,

    /// Human-readable names for codes and categories
    #[serde(default = "defaults::names")]
    pub names: BTreeMap<String, String>,
}

impl DigestConfig {
    /// Display name for a code or category, falling back to the code itself.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.names.get(code).map_or(code, String::as_str)
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            source_category: defaults::source_category(),
            priority_codes: defaults::priority_codes(),
            interest_categories: defaults::interest_categories(),
            main_heading: defaults::main_heading(),
            names: defaults::names(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving `YYYYMMDD_<Label>.html` files
    #[serde(default = "defaults::output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
        }
    }
}

mod defaults {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    // Fetch defaults
    pub fn base_url() -> String {
        "https://arxiv.org".into()
    }
    pub fn user_agent() -> String {
        "arxiv-digest/0.1 (+https://github.com/arxiv-digest)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Digest defaults
    pub fn source_category() -> String {
        "astro-ph".into()
    }
    pub fn priority_codes() -> Vec<String> {
        vec!["astro-ph.GA".into(), "astro-ph.IM".into()]
    }
    pub fn interest_categories() -> Vec<String> {
        vec![
            "physics.hist-ph".into(),
            "physics.ed-ph".into(),
            "physics.pop-ph".into(),
        ]
    }
    pub fn main_heading() -> String {
        "Astrophysics (other categories)".into()
    }
    pub fn names() -> BTreeMap<String, String> {
        [
            ("astro-ph.GA", "Astrophysics of Galaxies"),
            ("astro-ph.IM", "Instrumentation and Methods"),
            ("physics.hist-ph", "History & Philosophy of Physics"),
            ("physics.ed-ph", "Physics Education"),
            ("physics.pop-ph", "Popular Physics"),
        ]
        .into_iter()
        .map(|(code, name)| (code.to_string(), name.to_string()))
        .collect()
    }

    // Output defaults
    pub fn output_dir() -> PathBuf {
        PathBuf::from(".")
    }
}
