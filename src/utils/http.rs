// src/utils/http.rs

//! HTTP client utilities and the listing fetcher.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{AppError, Result};
use crate::models::FetchConfig;
use crate::utils::listing_url;

/// Source of raw listing markup, one page per category.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the new-submissions listing for a category.
    async fn fetch(&self, category: &str) -> Result<String>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &FetchConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetches listing pages over HTTP. No retries.
pub struct HttpListingSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpListingSource {
    /// Create a listing source from fetch settings.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch(&self, category: &str) -> Result<String> {
        let url = listing_url(&self.base_url, category)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        check_status(category, response.status())?;
        Ok(response.text().await?)
    }
}

/// Map a non-success status to a fetch error for the category.
fn check_status(category: &str, status: StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(AppError::fetch(category, format!("HTTP status {status}")))
    }
}
