//! LaTeX-style typographic cleanup that leaves math untouched.
//!
//! Titles and abstracts on listing pages mix TeX text shorthand (`--`,
//! ``` `` ```, `\,`, `~`, ...) with inline and display math. The math must
//! reach MathJax byte for byte, so the text is first split into protected
//! math regions and plain spans, and the substitutions only run over the
//! plain spans.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// `\(..\)`, `\[..\]`, `$$..$$` and `$..$`, tried in that order at each
/// position. Shortest match, `.` spans newlines.
static MATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\\\(.+?\\\)|\\\[.+?\\\]|\$\$.*?\$\$|\$.*?\$")
        .expect("math delimiter pattern is valid")
});

/// Ordered substitutions for plain spans. Later rules see earlier output.
static TEX_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"---", "\u{2014}"),     // em dash
        (r"--", "\u{2013}"),      // en dash
        (r"``", "\u{201C}"),      // opening double quote
        (r"''", "\u{201D}"),      // closing double quote
        (r"\\,\s*", "\u{2009}"),  // thin space
        (r"\\;", "\u{2005}"),     // medium space
        (r"\\:", "\u{2005}"),     // medium space
        (r"\\!", ""),             // negative thin space
        (r"~", "\u{00A0}"),       // non-breaking space
        (r"\\-", ""),             // discretionary hyphen
        (r"\\/", ""),             // italic correction
        (r"\\&", "&"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("substitution pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// A slice of the input, either math to keep verbatim or text to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// Math region including its delimiters.
    Protected(&'a str),
    /// Text between math regions.
    Plain(&'a str),
}

impl Span<'_> {
    fn render(&self, out: &mut String) {
        match self {
            Span::Protected(math) => out.push_str(math),
            Span::Plain(text) => out.push_str(&apply_rules(text)),
        }
    }
}

/// Split `text` into ordered protected and plain spans.
///
/// Empty plain spans are omitted, so concatenating the spans always
/// reproduces `text`.
pub fn partition(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    for m in MATH_RE.find_iter(text) {
        if m.start() > pos {
            spans.push(Span::Plain(&text[pos..m.start()]));
        }
        spans.push(Span::Protected(m.as_str()));
        pos = m.end();
    }

    if pos < text.len() {
        spans.push(Span::Plain(&text[pos..]));
    }
    spans
}

/// Rewrite TeX text shorthand outside of math regions.
///
/// Unterminated delimiters never open a protected region; they are treated
/// as plain text.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len());
    for span in partition(text) {
        span.render(&mut out);
    }
    out
}

fn apply_rules(chunk: &str) -> String {
    TEX_RULES
        .iter()
        .fold(chunk.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, NoExpand(*replacement)).into_owned()
        })
}
