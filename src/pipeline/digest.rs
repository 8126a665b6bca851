// src/pipeline/digest.rs

//! Daily digest pipeline: fetch, parse, classify, render, write.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{Config, Entry};
use crate::services::{ListingParser, Page, Section, classify, nice_date, render_page};
use crate::storage::{LocalOutput, date_stamp};
use crate::utils::http::ListingSource;

pub const PRIORITY_LABEL: &str = "Priority";
pub const MAIN_LABEL: &str = "Main";
pub const INTEREST_LABEL: &str = "Interest";

/// Summary of a digest run.
#[derive(Debug, Default)]
pub struct DigestSummary {
    pub pages: Vec<PathBuf>,
    pub priority_count: usize,
    pub main_count: usize,
    pub interest_count: usize,
}

/// Build and write the Priority, Main and Interest pages for `date`.
///
/// Categories are fetched one at a time; the first fetch failure aborts
/// the run.
pub async fn run_digest(
    config: &Config,
    source: &dyn ListingSource,
    output: &LocalOutput,
    date: NaiveDate,
) -> Result<DigestSummary> {
    let parser = ListingParser::new(&config.listing, &config.fetch.base_url)?;
    let digest = &config.digest;

    let source_entries = fetch_entries(source, &parser, &digest.source_category).await?;
    let buckets = classify(&source_entries, &digest.priority_codes);

    let mut interest: Vec<(String, Vec<Entry>)> = Vec::new();
    for category in &digest.interest_categories {
        let entries = fetch_entries(source, &parser, category).await?;
        interest.push((digest.display_name(category).to_string(), entries));
    }

    let pages = [
        Page::new(PRIORITY_LABEL, buckets.priority_sections(digest)),
        Page::new(
            MAIN_LABEL,
            vec![Section::new(&digest.main_heading, buckets.main.clone())],
        ),
        Page::new(
            INTEREST_LABEL,
            interest
                .iter()
                .map(|(heading, entries)| Section::new(heading, entries.iter().collect()))
                .collect(),
        ),
    ];

    let stamp = date_stamp(date);
    let date_str = nice_date(date);
    let mut summary = DigestSummary {
        priority_count: buckets.priority_count(),
        main_count: buckets.main.len(),
        interest_count: interest.iter().map(|(_, e)| e.len()).sum(),
        ..DigestSummary::default()
    };

    for page in &pages {
        let html = render_page(page, &date_str);
        summary
            .pages
            .push(output.write_page(&stamp, &page.label, &html).await?);
    }

    Ok(summary)
}

async fn fetch_entries(
    source: &dyn ListingSource,
    parser: &ListingParser,
    category: &str,
) -> Result<Vec<Entry>> {
    log::info!("Fetching {}", category);
    let markup = source.fetch(category).await?;
    let entries = parser.parse(&markup);
    log::info!("Parsed {} entries from {}", entries.len(), category);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;

    /// Serves canned listing pages keyed by category.
    struct StaticSource {
        pages: HashMap<String, String>,
    }

    #[async_trait]
    impl ListingSource for StaticSource {
        async fn fetch(&self, category: &str) -> Result<String> {
            self.pages
                .get(category)
                .cloned()
                .ok_or_else(|| AppError::fetch(category, "HTTP status 404 Not Found"))
        }
    }

    fn listing(items: &[(&str, &str, &str)]) -> String {
        let blocks: String = items
            .iter()
            .map(|(id, title, subjects)| {
                format!(
                    r#"<dt><a href="/abs/{id}" title="Abstract">arXiv:{id}</a></dt>
                       <dd><div class="list-title">Title: {title}</div>
                       <div class="list-subjects">Subjects: {subjects}</div>
                       <p class="mathjax">Abstract of {id}.</p></dd>"#
                )
            })
            .collect();
        format!(r#"<html><body><dl id="articles">{blocks}</dl></body></html>"#)
    }

    fn source() -> StaticSource {
        let mut pages = HashMap::new();
        pages.insert(
            "astro-ph".to_string(),
            listing(&[
                ("2410.00001", "Bars in disks", "Astrophysics of Galaxies (astro-ph.GA)"),
                ("2410.00002", "A new spectrograph", "Instrumentation (astro-ph.IM)"),
                ("2410.00003", "Solar flares", "Solar and Stellar (astro-ph.SR)"),
            ]),
        );
        pages.insert(
            "physics.hist-ph".to_string(),
            listing(&[("2410.00004", "Kepler's notebooks", "(physics.hist-ph)")]),
        );
        pages.insert("physics.ed-ph".to_string(), listing(&[]));
        pages.insert(
            "physics.pop-ph".to_string(),
            listing(&[("2410.00005", "Why the sky is dark", "(physics.pop-ph)")]),
        );
        StaticSource { pages }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[tokio::test]
    async fn test_run_digest_writes_three_pages() {
        let dir = tempfile::tempdir().unwrap();
        let output = LocalOutput::new(dir.path());

        let summary = run_digest(&Config::default(), &source(), &output, date())
            .await
            .unwrap();

        assert_eq!(summary.priority_count, 2);
        assert_eq!(summary.main_count, 1);
        assert_eq!(summary.interest_count, 2);
        assert_eq!(
            summary.pages,
            vec![
                dir.path().join("20261018_Priority.html"),
                dir.path().join("20261018_Main.html"),
                dir.path().join("20261018_Interest.html"),
            ]
        );

        let priority = std::fs::read_to_string(&summary.pages[0]).unwrap();
        assert!(priority.contains("Bars in disks"));
        assert!(priority.contains("A new spectrograph"));
        assert!(!priority.contains("Solar flares"));

        let main = std::fs::read_to_string(&summary.pages[1]).unwrap();
        assert!(main.contains("Astrophysics (other categories)"));
        assert!(main.contains("Solar flares"));

        let interest = std::fs::read_to_string(&summary.pages[2]).unwrap();
        assert!(interest.contains("History &amp; Philosophy of Physics"));
        assert!(interest.contains("Popular Physics"));
        assert!(!interest.contains("<h2>Physics Education</h2>"));
        assert!(interest.contains("18th October 2026"));
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let output = LocalOutput::new(dir.path());
        let mut source = source();
        source.pages.remove("physics.ed-ph");

        let result = run_digest(&Config::default(), &source, &output, date()).await;
        assert!(matches!(result, Err(AppError::Fetch { .. })));
        assert!(!dir.path().join("20261018_Priority.html").exists());
    }
}
