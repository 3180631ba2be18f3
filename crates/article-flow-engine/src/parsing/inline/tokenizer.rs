use std::collections::BTreeMap;

use url::Url;

use super::emphasis::emphasis_runs;
use super::styled::StyledText;
use crate::models::LinkReference;
use crate::resolve::{TopicLookup, resolve};

/// An inline rendering unit within a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A word (maximal run of non-whitespace characters) with its styles.
    Text(StyledText),
    /// One whitespace or newline character.
    Space,
    /// A literal markdown hyperlink, resolved against the catalog.
    Link {
        text: StyledText,
        reference: LinkReference,
    },
    /// An interactive reference badge substituted by the preprocessor.
    Reference(LinkReference),
}

/// Tokenizes one block's text into inline segments.
///
/// The emphasis pass yields formatted runs; link runs become single `Link`
/// segments, everything else is decomposed into word and space tokens, and
/// words containing placeholder keys are split recursively so the badge
/// lands between the surrounding text fragments.
pub fn tokenize(
    text: &str,
    lookup: &impl TopicLookup,
    references: &BTreeMap<String, LinkReference>,
) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending = StyledText::default();

    for run in emphasis_runs(text) {
        match run.link {
            Some(url) => {
                tokenize_chunk(std::mem::take(&mut pending), references, &mut segments);
                segments.push(link_segment(&run.text, &url, lookup));
            }
            // Adjacent non-link runs merge so emphasis boundaries inside a
            // word don't split it in two.
            None => pending.push_run(&run.text, run.style),
        }
    }
    tokenize_chunk(pending, references, &mut segments);

    segments
}

fn link_segment(text: &str, url: &str, lookup: &impl TopicLookup) -> Segment {
    let display = if text.is_empty() {
        link_fallback_text(url)
    } else {
        text.to_string()
    };
    let reference = resolve(url, &display, lookup);
    Segment::Link {
        text: StyledText::plain(display),
        reference,
    }
}

/// Display text for a link whose markdown label was empty: the host when the
/// URL parses, otherwise the URL text itself.
fn link_fallback_text(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}

/// Splits a merged run of styled text into word and space segments.
fn tokenize_chunk(
    chunk: StyledText,
    references: &BTreeMap<String, LinkReference>,
    out: &mut Vec<Segment>,
) {
    if chunk.is_empty() {
        return;
    }

    let mut word_start = 0;
    for (offset, ch) in chunk.as_str().char_indices() {
        if ch.is_whitespace() {
            if offset > word_start {
                split_word(chunk.slice(word_start, offset), references, out);
            }
            out.push(Segment::Space);
            word_start = offset + ch.len_utf8();
        }
    }
    if word_start < chunk.len() {
        split_word(chunk.slice(word_start, chunk.len()), references, out);
    }
}

/// Emits segments for one word, splitting recursively around embedded
/// placeholder keys.
///
/// Placeholders can end up glued to punctuation after the emphasis pass
/// reflows text, hence the substring case. Terminates because each split
/// strictly shrinks the remaining word.
fn split_word(
    word: StyledText,
    references: &BTreeMap<String, LinkReference>,
    out: &mut Vec<Segment>,
) {
    if let Some(reference) = references.get(word.as_str()) {
        out.push(Segment::Reference(reference.clone()));
        return;
    }

    if let Some((start, key)) = find_placeholder(word.as_str(), references) {
        let prefix = word.slice(0, start);
        let suffix = word.slice(start + key.len(), word.len());
        if !prefix.is_empty() {
            split_word(prefix, references, out);
        }
        out.push(Segment::Reference(references[&key].clone()));
        if !suffix.is_empty() {
            split_word(suffix, references, out);
        }
        return;
    }

    out.push(Segment::Text(word));
}

/// Finds the earliest placeholder key occurring in `word`, returning its
/// byte offset and the key.
fn find_placeholder(
    word: &str,
    references: &BTreeMap<String, LinkReference>,
) -> Option<(usize, String)> {
    for (start, _) in word.match_indices('\u{27e6}') {
        let rest = &word[start..];
        let Some(close) = rest.find('\u{27e7}') else {
            continue;
        };
        let candidate = &rest[..close + '\u{27e7}'.len_utf8()];
        if references.contains_key(candidate) {
            return Some((start, candidate.to_string()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticleTopic, Catalog};
    use crate::parsing::preprocess::placeholder;
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(vec![ArticleTopic::new("Better Sleep", "sleep.md")])
    }

    fn references() -> BTreeMap<String, LinkReference> {
        let mut table = BTreeMap::new();
        table.insert(
            placeholder(0),
            LinkReference::to_url("https://example.com/a", "source"),
        );
        table.insert(
            placeholder(1),
            LinkReference::to_url("https://example.com/b", "other"),
        );
        table
    }

    fn kinds(segments: &[Segment]) -> Vec<&'static str> {
        segments
            .iter()
            .map(|s| match s {
                Segment::Text(_) => "text",
                Segment::Space => "space",
                Segment::Link { .. } => "link",
                Segment::Reference(_) => "reference",
            })
            .collect()
    }

    #[test]
    fn words_and_spaces() {
        let segments = tokenize("two words", &catalog(), &BTreeMap::new());
        assert_eq!(kinds(&segments), vec!["text", "space", "text"]);
    }

    #[test]
    fn bare_placeholder_is_one_reference() {
        let text = placeholder(0);
        let segments = tokenize(&text, &catalog(), &references());
        assert_eq!(kinds(&segments), vec!["reference"]);
    }

    #[test]
    fn parenthesized_placeholder_splits_in_three() {
        let text = format!("({})", placeholder(0));
        let segments = tokenize(&text, &catalog(), &references());
        assert_eq!(kinds(&segments), vec!["text", "reference", "text"]);

        let Segment::Text(prefix) = &segments[0] else {
            panic!("expected text prefix");
        };
        assert_eq!(prefix.as_str(), "(");
        let Segment::Text(suffix) = &segments[2] else {
            panic!("expected text suffix");
        };
        assert_eq!(suffix.as_str(), ")");
    }

    #[test]
    fn placeholder_with_trailing_period() {
        let text = format!("{}.", placeholder(0));
        let segments = tokenize(&text, &catalog(), &references());
        assert_eq!(kinds(&segments), vec!["reference", "text"]);
    }

    #[test]
    fn adjacent_placeholders_both_emit() {
        let text = format!("{}{}", placeholder(0), placeholder(1));
        let segments = tokenize(&text, &catalog(), &references());
        assert_eq!(kinds(&segments), vec!["reference", "reference"]);
    }

    #[test]
    fn unknown_placeholder_shape_stays_text() {
        let segments = tokenize("\u{27e6}ref:9\u{27e7}", &catalog(), &references());
        assert_eq!(kinds(&segments), vec!["text"]);
    }

    #[test]
    fn literal_link_resolves_against_catalog() {
        let segments = tokenize("read [this](sleep.md) now", &catalog(), &BTreeMap::new());
        let link = segments
            .iter()
            .find_map(|s| match s {
                Segment::Link { text, reference } => Some((text, reference)),
                _ => None,
            })
            .unwrap();
        assert_eq!(link.0.as_str(), "this");
        assert_eq!(link.1.article.as_deref(), Some("sleep.md"));
    }

    #[test]
    fn empty_link_label_falls_back_to_host() {
        let segments = tokenize("[](https://example.com/page)", &catalog(), &BTreeMap::new());
        let Segment::Link { text, .. } = &segments[0] else {
            panic!("expected link segment");
        };
        assert_eq!(text.as_str(), "example.com");
    }

    #[test]
    fn styles_survive_word_splitting() {
        let text = format!("**({})**", placeholder(0));
        let segments = tokenize(&text, &catalog(), &references());
        assert_eq!(kinds(&segments), vec!["text", "reference", "text"]);
        let Segment::Text(prefix) = &segments[0] else {
            panic!("expected text prefix");
        };
        assert!(prefix.style_at(0).bold);
    }

    #[test]
    fn emphasis_across_word_keeps_one_word() {
        let segments = tokenize("wo**rd**", &catalog(), &BTreeMap::new());
        assert_eq!(kinds(&segments), vec!["text"]);
        let Segment::Text(word) = &segments[0] else {
            panic!("expected one word");
        };
        assert_eq!(word.as_str(), "word");
        assert!(!word.style_at(0).bold);
        assert!(word.style_at(2).bold);
    }
}
