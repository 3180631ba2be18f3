use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::LinkReference;
use crate::resolve::{TopicLookup, resolve};

/// Footnote definition line: `[1]: https://example.com`.
static FOOTNOTE_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[(\w+)\]:\s*(.+)$").expect("footnote pattern"));

/// Any numeric footnote definition line, including its trailing newline.
static FOOTNOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[\d+\]:.*\n?").expect("footnote line pattern"));

/// Inline reference marker: `[title][1]`.
static REF_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\[(\d+)\]").expect("marker pattern"));

/// Noisy artifact left behind by the content import tooling.
static IMPORT_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":contentReference\[.*?\]\{.*?\}").expect("artifact pattern"));

const PLACEHOLDER_OPEN: &str = "\u{27e6}ref:"; // ⟦ref:
const PLACEHOLDER_CLOSE: char = '\u{27e7}'; // ⟧

/// The synthetic marker correlating a substituted reference marker with its
/// inline segment. Never shown to the user.
pub fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
}

/// Result of one preprocessing pass: cleaned markdown plus the table mapping
/// each emitted placeholder to its resolved reference.
#[derive(Debug, Clone, Default)]
pub struct Preprocessed {
    pub text: String,
    pub references: BTreeMap<String, LinkReference>,
}

/// Runs the full preprocessing pass.
///
/// Steps, in load-bearing order: extract footnote definitions, substitute
/// known reference markers with placeholders (scanning the original text),
/// strip footnote definition lines, strip import artifacts. The output
/// contains no footnote lines and no artifacts, and every placeholder in it
/// has an entry in `references`. Total: never fails for any input.
pub fn process(markdown: &str, lookup: &impl TopicLookup) -> Preprocessed {
    let footnotes = extract_footnotes(markdown);

    let mut references = BTreeMap::new();
    let substituted = substitute_markers(markdown, &footnotes, lookup, &mut references);
    let stripped = strip_footnote_lines(&substituted);
    // Stripping a trailing footnote block leaves dangling newlines behind.
    let text = strip_artifacts(&stripped).trim_end().to_string();

    Preprocessed { text, references }
}

/// Collects `[id]: url` lines into a footnote table.
///
/// A usable URL is non-empty with no internal whitespace after trimming;
/// relative paths count (they may name internal articles). Malformed
/// entries are dropped silently.
pub fn extract_footnotes(markdown: &str) -> BTreeMap<String, String> {
    let mut table = BTreeMap::new();
    for caps in FOOTNOTE_DEF.captures_iter(markdown) {
        let id = &caps[1];
        let rest = caps[2].trim();
        if rest.is_empty() || rest.contains(char::is_whitespace) {
            continue;
        }
        table.insert(id.to_string(), rest.to_string());
    }
    table
}

/// Replaces each `[title][n]` marker whose numeral is in the footnote table
/// with a fresh placeholder, resolving the footnote URL against the catalog.
/// Unknown numerals pass through as literal text.
///
/// Placeholders are numbered by first appearance, left to right.
fn substitute_markers(
    markdown: &str,
    footnotes: &BTreeMap<String, String>,
    lookup: &impl TopicLookup,
    references: &mut BTreeMap<String, LinkReference>,
) -> String {
    let mut out = String::with_capacity(markdown.len());
    let mut last = 0;
    let mut counter = 0usize;

    for caps in REF_MARKER.captures_iter(markdown) {
        let whole = caps.get(0).expect("match group 0");
        let title = &caps[1];
        let numeral = &caps[2];

        let Some(url) = footnotes.get(numeral) else {
            continue;
        };

        out.push_str(&markdown[last..whole.start()]);
        let key = placeholder(counter);
        references.insert(key.clone(), resolve(url, title, lookup));
        out.push_str(&key);
        counter += 1;
        last = whole.end();
    }
    out.push_str(&markdown[last..]);
    out
}

/// Removes every numeric footnote definition line from the document so the
/// block parser never sees one as a paragraph.
pub fn strip_footnote_lines(markdown: &str) -> String {
    FOOTNOTE_LINE.replace_all(markdown, "").into_owned()
}

/// Removes `:contentReference[...]{...}` import artifacts. Applied last.
pub fn strip_artifacts(markdown: &str) -> std::borrow::Cow<'_, str> {
    IMPORT_ARTIFACT.replace_all(markdown, "")
}
