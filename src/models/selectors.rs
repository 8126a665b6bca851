// src/models/selectors.rs

//! CSS selectors for scraping a listing page.

use serde::{Deserialize, Serialize};

/// CSS selectors for scraping an arXiv `/list/<category>/new` page.
///
/// Head (`dt`) and body (`dd`) blocks are paired by position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingSelectors {
    /// Selector for the head blocks holding the reference link
    #[serde(default = "defaults::head")]
    pub head_selector: String,

    /// Selector for the body blocks holding title, abstract and subjects
    #[serde(default = "defaults::body")]
    pub body_selector: String,

    /// Selector for the abstract link within a head block
    #[serde(default = "defaults::link")]
    pub link_selector: String,

    /// Selector for the title element within a body block
    #[serde(default = "defaults::title")]
    pub title_selector: String,

    /// Selector for the abstract paragraph within a body block
    #[serde(default = "defaults::abstract_")]
    pub abstract_selector: String,

    /// Selector for the subjects line within a body block
    #[serde(default = "defaults::subjects")]
    pub subjects_selector: String,

    /// HTML attribute holding the link target (usually "href")
    #[serde(default = "defaults::attr_name")]
    pub attr_name: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            head_selector: defaults::head(),
            body_selector: defaults::body(),
            link_selector: defaults::link(),
            title_selector: defaults::title(),
            abstract_selector: defaults::abstract_(),
            subjects_selector: defaults::subjects(),
            attr_name: defaults::attr_name(),
        }
    }
}

mod defaults {
    pub fn head() -> String {
        "dl#articles > dt".into()
    }
    pub fn body() -> String {
        "dl#articles > dd".into()
    }
    pub fn link() -> String {
        r#"a[href*="/abs/"]"#.into()
    }
    pub fn title() -> String {
        ".list-title".into()
    }
    pub fn abstract_() -> String {
        "p.mathjax".into()
    }
    pub fn subjects() -> String {
        ".list-subjects".into()
    }
    pub fn attr_name() -> String {
        "href".into()
    }
}
