// src/services/listing.rs

//! Listing page parser.
//!
//! Turns one `/list/<category>/new` page into entries using the configured
//! CSS selectors. Extraction is best effort: missing fields fall back to
//! empty values and only a missing identifier drops an entry.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Entry, ListingSelectors};
use crate::services::normalizer::normalize;
use crate::utils::extract_arxiv_id;

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([A-Za-z0-9.\-]+)\)").expect("subject code pattern is valid")
});

const TITLE_LABEL: &str = "Title:";
const ABSTRACT_LABEL: &str = "Abstract:";

/// Parser for listing pages with pre-compiled selectors.
#[derive(Debug, Clone)]
pub struct ListingParser {
    head_sel: Selector,
    body_sel: Selector,
    link_sel: Selector,
    title_sel: Selector,
    abstract_sel: Selector,
    subjects_sel: Selector,
    attr_name: String,
    base_url: String,
}

impl ListingParser {
    /// Compile the selectors. `base_url` is used to build abstract URLs.
    pub fn new(selectors: &ListingSelectors, base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            head_sel: Self::parse_selector(&selectors.head_selector)?,
            body_sel: Self::parse_selector(&selectors.body_selector)?,
            link_sel: Self::parse_selector(&selectors.link_selector)?,
            title_sel: Self::parse_selector(&selectors.title_selector)?,
            abstract_sel: Self::parse_selector(&selectors.abstract_selector)?,
            subjects_sel: Self::parse_selector(&selectors.subjects_selector)?,
            attr_name: selectors.attr_name.clone(),
            base_url: base_url.into(),
        })
    }

    /// Extract entries from raw listing markup.
    ///
    /// Head and body blocks are paired by position; surplus blocks on either
    /// side are ignored.
    pub fn parse(&self, raw_markup: &str) -> Vec<Entry> {
        let document = Html::parse_document(raw_markup);
        let heads = document.select(&self.head_sel);
        let bodies = document.select(&self.body_sel);

        let mut entries = Vec::new();
        let mut dropped = 0usize;
        for (head, body) in heads.zip(bodies) {
            match self.parse_pair(&head, &body) {
                Some(entry) => entries.push(entry),
                None => dropped += 1,
            }
        }

        if dropped > 0 {
            log::debug!("Dropped {} listing blocks without an identifier", dropped);
        }
        entries
    }

    fn parse_pair(&self, head: &ElementRef, body: &ElementRef) -> Option<Entry> {
        let href = head
            .select(&self.link_sel)
            .next()
            .and_then(|a| a.value().attr(&self.attr_name))?;
        let id = extract_arxiv_id(href)?.to_string();

        let title = self
            .field_text(body, &self.title_sel)
            .map(|text| strip_label(&text, TITLE_LABEL))
            .unwrap_or_default();
        let abstract_text = self
            .field_text(body, &self.abstract_sel)
            .map(|text| strip_label(&text, ABSTRACT_LABEL))
            .unwrap_or_default();
        let codes = self
            .field_text(body, &self.subjects_sel)
            .map(|text| extract_codes(&text))
            .unwrap_or_default();

        Some(Entry {
            abs_url: Entry::abs_url_for(&self.base_url, &id),
            id,
            title: normalize(&title),
            abstract_text: normalize(&abstract_text),
            codes,
        })
    }

    fn field_text(&self, body: &ElementRef, selector: &Selector) -> Option<String> {
        body.select(selector).next().map(|el| flatten_text(&el))
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

/// Element text with text nodes joined and whitespace collapsed.
fn flatten_text(el: &ElementRef) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_label(text: &str, label: &str) -> String {
    text.strip_prefix(label).unwrap_or(text).trim().to_string()
}

/// Collect every parenthesized subject code in a subjects line.
pub fn extract_codes(subjects: &str) -> BTreeSet<String> {
    CODE_RE
        .captures_iter(subjects)
        .map(|caps| caps[1].to_string())
        .collect()
}
