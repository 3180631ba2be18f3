use crate::models::ArticleTopic;

/// A resolved link target: either an internal article (by catalog link key),
/// an external URL, or neither ("reference unavailable").
///
/// At most one of `article`/`url` is set. Both unset is a valid state the
/// presentation layer renders as an inert badge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkReference {
    /// Display text. For internal references this is the article's own
    /// catalog title, not the source text of the marker.
    pub title: String,
    /// Catalog link key of the target article, when internal.
    pub article: Option<String>,
    /// Target URL text, when external. Kept as the original string so
    /// scheme-less leftovers survive unchanged.
    pub url: Option<String>,
}

impl LinkReference {
    /// Reference into the catalog; takes the article's own title.
    pub fn to_article(topic: &ArticleTopic) -> Self {
        Self {
            title: topic.title.clone(),
            article: Some(topic.link.clone()),
            url: None,
        }
    }

    /// Reference to an external target, displayed with the fallback title.
    pub fn to_url(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            article: None,
            url: Some(url.into()),
        }
    }

    /// The inert "reference unavailable" state.
    pub fn unavailable(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            article: None,
            url: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.article.is_some() || self.url.is_some()
    }
}
