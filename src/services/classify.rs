//! Bucketing of entries into digest sections.

use crate::models::{DigestConfig, Entry};

/// A titled group of entries on a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub heading: String,
    pub entries: Vec<&'a Entry>,
}

impl<'a> Section<'a> {
    pub fn new(heading: impl Into<String>, entries: Vec<&'a Entry>) -> Self {
        Self {
            heading: heading.into(),
            entries,
        }
    }
}

/// Entries of the source category split by priority code.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Buckets<'a> {
    /// One bucket per priority code, in configuration order.
    pub priority: Vec<(String, Vec<&'a Entry>)>,
    /// Entries carrying none of the priority codes.
    pub main: Vec<&'a Entry>,
}

impl<'a> Buckets<'a> {
    /// Priority buckets as sections headed by their display names.
    pub fn priority_sections(&self, digest: &DigestConfig) -> Vec<Section<'a>> {
        self.priority
            .iter()
            .map(|(code, entries)| Section::new(digest.display_name(code), entries.clone()))
            .collect()
    }

    pub fn priority_count(&self) -> usize {
        self.priority.iter().map(|(_, entries)| entries.len()).sum()
    }
}

/// Route each entry to the first priority code it carries, or to main.
pub fn classify<'a>(entries: &'a [Entry], priority_codes: &[String]) -> Buckets<'a> {
    let mut buckets = Buckets {
        priority: priority_codes
            .iter()
            .map(|code| (code.clone(), Vec::new()))
            .collect(),
        main: Vec::new(),
    };

    for entry in entries {
        let slot = buckets
            .priority
            .iter_mut()
            .find(|(code, _)| entry.has_code(code));
        match slot {
            Some((_, bucket)) => bucket.push(entry),
            None => buckets.main.push(entry),
        }
    }
    buckets
}
