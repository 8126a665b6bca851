//! Listing entry data structure.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One submission extracted from a listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// arXiv identifier, e.g. `2410.01234v2`
    pub id: String,

    /// Normalized title (empty if the page had none)
    pub title: String,

    /// Normalized abstract (empty if the page had none)
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    /// Absolute URL of the abstract page
    pub abs_url: String,

    /// Subject classification codes, e.g. `astro-ph.GA`
    pub codes: BTreeSet<String>,
}

impl Entry {
    /// Absolute abstract-page URL for an identifier.
    pub fn abs_url_for(base_url: &str, id: &str) -> String {
        format!("{}/abs/{}", base_url.trim_end_matches('/'), id)
    }

    /// Whether the entry carries the given subject code.
    pub fn has_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Text to show as the link label: the title, or the id when untitled.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> Entry {
        Entry {
            id: "2410.01234".to_string(),
            title: String::new(),
            abstract_text: "Stars.".to_string(),
            abs_url: Entry::abs_url_for("https://arxiv.org", "2410.01234"),
            codes: ["astro-ph.GA".to_string()].into_iter().collect(),
        }
    }

    #[test]
    fn test_abs_url_for() {
        assert_eq!(
            Entry::abs_url_for("https://arxiv.org/", "2410.01234v1"),
            "https://arxiv.org/abs/2410.01234v1"
        );
    }

    #[test]
    fn test_display_title_falls_back_to_id() {
        let mut entry = sample_entry();
        assert_eq!(entry.display_title(), "2410.01234");
        entry.title = "Galaxy winds".to_string();
        assert_eq!(entry.display_title(), "Galaxy winds");
    }

    #[test]
    fn test_serializes_abstract_field_name() {
        let json = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(json["abstract"], "Stars.");
        assert_eq!(json["codes"][0], "astro-ph.GA");
        assert!(sample_entry().has_code("astro-ph.GA"));
    }
}
