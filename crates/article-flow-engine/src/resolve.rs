use url::Url;

use crate::models::{ArticleTopic, Catalog, LinkReference};

/// Lookup seam between the pipeline and the catalog.
///
/// The catalog implementation below is a linear scan; callers only depend on
/// this trait, so a map keyed by normalized link can replace it without
/// touching the pipeline.
pub trait TopicLookup {
    /// Find a topic whose link matches `link` case-insensitively, with or
    /// without the `.md` extension.
    fn topic_for_link(&self, link: &str) -> Option<&ArticleTopic>;
}

impl TopicLookup for Catalog {
    fn topic_for_link(&self, link: &str) -> Option<&ArticleTopic> {
        let wanted = normalize_link(link);
        self.topics()
            .find(|topic| normalize_link(&topic.link) == wanted)
    }
}

/// Lowercase a link key and strip a trailing `.md`.
pub fn normalize_link(link: &str) -> String {
    let lower = link.to_lowercase();
    lower.strip_suffix(".md").unwrap_or(&lower).to_string()
}

/// Decide whether `url` points at an internal article or an external source.
///
/// A URL with a scheme is always external. A scheme-less path is matched
/// against the catalog by its last path component; on a hit the reference
/// carries the article's own title, not `fallback_title`. An empty URL
/// produces the unavailable state. Never fails and performs no I/O.
pub fn resolve(url: &str, fallback_title: &str, lookup: &impl TopicLookup) -> LinkReference {
    let url = url.trim();
    if url.is_empty() {
        return LinkReference::unavailable(fallback_title);
    }

    if Url::parse(url).is_ok() {
        return LinkReference::to_url(url, fallback_title);
    }

    // Relative path: match the last component against the catalog.
    let last = url.rsplit('/').next().unwrap_or(url);
    match lookup.topic_for_link(last) {
        Some(topic) => LinkReference::to_article(topic),
        None => LinkReference::to_url(url, fallback_title),
    }
}
