//! Static HTML rendering of digest pages.
//!
//! Pages are self-contained: inline CSS plus MathJax from a CDN, configured
//! with the same math delimiters the normalizer protects.

use chrono::{Datelike, NaiveDate};

use crate::services::classify::Section;

const STYLE: &str = r#"<style>
  :root {
    --ink: #1b1f23; --muted: #666; --rule: #eee; --accent: #004aad;
  }
  body { font: 16px/1.6 system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif;
         margin: 2rem auto; max-width: 900px; padding: 0 1rem; color: var(--ink); }
  h1 { margin: 0 0 .25rem 0; font-size: 1.8rem; }
  .sub { color: var(--muted); margin: 0 0 1.25rem 0; }
  h2 { margin: 1.5rem 0 .5rem; font-size: 1.15rem; color: var(--muted); font-weight: 600; }
  article { padding: .75rem 0; border-top: 1px solid var(--rule); }
  a.title { text-decoration: none; font-weight: 600; color: inherit; }
  a.title:hover { text-decoration: underline; color: var(--accent); }
  .id { color:#999; font-size:.9rem; margin-left:.5rem; }
  details { margin-top: .35rem; }
  summary { cursor: pointer; color: var(--accent); outline: none; }
  .num { font-variant-numeric: tabular-nums; width: 2.25rem; display:inline-block; color:#999; }
</style>
"#;

const MATHJAX: &str = r#"<script>
window.MathJax = {
  tex: {
    inlineMath: [['$', '$'], ['\\(', '\\)']],
    displayMath: [['$$','$$'], ['\\[','\\]']],
    packages: {'[+]': ['textmacros']}
  },
  options: { skipHtmlTags: ['script','noscript','style','textarea','pre','code'] }
};
</script>
<script id="MathJax-script" async
  src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-chtml.js"></script>
"#;

/// One output document.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Filename label, e.g. `Priority`
    pub label: String,
    /// Heading shown at the top of the page
    pub title: String,
    pub sections: Vec<Section<'a>>,
}

impl<'a> Page<'a> {
    /// A page whose title equals its label.
    pub fn new(label: impl Into<String>, sections: Vec<Section<'a>>) -> Self {
        let label = label.into();
        Self {
            title: label.clone(),
            label,
            sections,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Day of month with its English ordinal suffix.
pub fn ordinal_day(day: u32) -> String {
    let suffix = if (10..=20).contains(&(day % 100)) {
        "th"
    } else {
        match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{day}{suffix}")
}

/// Long date, e.g. `18th October 2026`.
pub fn nice_date(date: NaiveDate) -> String {
    format!("{} {}", ordinal_day(date.day()), date.format("%B %Y"))
}

/// Render a full HTML document for a page.
pub fn render_page(page: &Page, date_str: &str) -> String {
    let total = page.entry_count();

    let headings: Vec<&str> = page
        .sections
        .iter()
        .filter(|s| !s.entries.is_empty())
        .map(|s| s.heading.as_str())
        .collect();

    let mut meta_bits = vec![date_str.to_string()];
    if !headings.is_empty() {
        meta_bits.push(headings.join("; "));
    }
    meta_bits.push(format!(
        "{} entr{}",
        total,
        if total == 1 { "y" } else { "ies" }
    ));

    let mut body = vec![
        format!("<h1>{}</h1>", escape_html(&page.title)),
        format!(
            "<div class=\"sub\">{}</div>",
            escape_html(&meta_bits.join(" \u{00B7} "))
        ),
    ];

    let mut index = 1;
    for section in page.sections.iter().filter(|s| !s.entries.is_empty()) {
        let (html, next) = render_section(section, index);
        body.push(html);
        index = next;
    }

    let mut html = render_head(&format!("{} \u{2014} {}", page.title, date_str));
    html.push_str(&body.join("\n"));
    html.push_str("</body>\n</html>");
    html
}

fn render_head(page_title: &str) -> String {
    let mut head = String::from("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    head.push_str("<meta charset=\"utf-8\">\n");
    head.push_str(&format!("<title>{}</title>\n", escape_html(page_title)));
    head.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
    head.push_str(STYLE);
    head.push_str(MATHJAX);
    head.push_str("</head>\n<body>\n");
    head
}

/// Render one section; returns the HTML and the next running number.
fn render_section(section: &Section, start_index: usize) -> (String, usize) {
    let mut parts = vec![format!("<h2>{}</h2>", escape_html(&section.heading))];
    let mut n = start_index;

    for entry in &section.entries {
        parts.push(format!(
            concat!(
                "<article>",
                "<div><span class=\"num\">{n:>2}.</span> ",
                "<a class=\"title\" href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">{title}</a>",
                "<span class=\"id\">[{id}]</span></div>",
                "<details><summary>Abstract</summary><div><p>{abs}</p></div></details>",
                "</article>"
            ),
            n = n,
            url = escape_html(&entry.abs_url),
            title = escape_html(entry.display_title()),
            id = escape_html(&entry.id),
            abs = escape_html(&entry.abstract_text),
        ));
        n += 1;
    }
    (parts.concat(), n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    fn entry(id: &str, title: &str, abstract_text: &str) -> Entry {
        Entry {
            id: id.to_string(),
            title: title.to_string(),
            abstract_text: abstract_text.to_string(),
            abs_url: Entry::abs_url_for("https://arxiv.org", id),
            codes: Default::default(),
        }
    }

    #[test]
    fn test_ordinal_day() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (30, "30th"),
        ];
        for (day, expected) in cases {
            assert_eq!(ordinal_day(day), expected);
        }
    }

    #[test]
    fn test_nice_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(nice_date(date), "18th October 2026");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">R&D</a>"#),
            "&lt;a href=&quot;x&quot;&gt;R&amp;D&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_numbers_across_sections_and_skips_empty() {
        let a = entry("2410.00001", "First", "A");
        let b = entry("2410.00002", "Second", "B");
        let c = entry("2410.00003", "Third", "C");
        let page = Page::new(
            "Priority",
            vec![
                Section::new("Astrophysics of Galaxies", vec![&a, &b]),
                Section::new("Empty Section", vec![]),
                Section::new("Instrumentation and Methods", vec![&c]),
            ],
        );

        let html = render_page(&page, "18th October 2026");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.ends_with("</body>\n</html>"));
        assert!(html.contains("<title>Priority \u{2014} 18th October 2026</title>"));
        assert!(html.contains(
            "18th October 2026 \u{00B7} Astrophysics of Galaxies; Instrumentation and Methods \u{00B7} 3 entries"
        ));
        assert!(!html.contains("Empty Section"));
        assert!(html.contains("<span class=\"num\"> 1.</span>"));
        assert!(html.contains("<span class=\"num\"> 3.</span>"));
        assert!(html.contains("href=\"https://arxiv.org/abs/2410.00003\""));
        assert!(html.contains("MathJax"));
    }

    #[test]
    fn test_render_single_entry_and_untitled() {
        let a = entry("2410.00004", "", "x < y & $a<b$");
        let page = Page::new("Main", vec![Section::new("Other", vec![&a])]);
        let html = render_page(&page, "1st May 2026");

        assert!(html.contains("1 entry"));
        assert!(html.contains(">2410.00004</a>"));
        assert!(html.contains("<p>x &lt; y &amp; $a&lt;b$</p>"));
    }

    #[test]
    fn test_render_empty_page() {
        let page = Page::new("Interest", vec![Section::new("Popular Physics", vec![])]);
        let html = render_page(&page, "1st May 2026");
        assert!(html.contains("<div class=\"sub\">1st May 2026 \u{00B7} 0 entries</div>"));
        assert!(!html.contains("<article>"));
    }
}
