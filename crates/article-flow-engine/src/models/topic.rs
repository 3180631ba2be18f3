use serde::{Deserialize, Serialize};

/// One entry of the bundled article catalog.
///
/// `link` is the unique filename-like key articles are addressed by
/// (`sleep.md`); it doubles as the resource name the caller loads the
/// markdown text from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleTopic {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub image_links: Vec<String>,
}

impl ArticleTopic {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            image_links: Vec::new(),
        }
    }

    /// The link key without its `.md` extension, for display and for
    /// resource addressing.
    pub fn display_link(&self) -> &str {
        self.link.strip_suffix(".md").unwrap_or(&self.link)
    }
}

/// The read-only article catalog, loaded once at startup and never mutated.
///
/// Order is preserved from the index file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    topics: Vec<ArticleTopic>,
}

impl Catalog {
    pub fn new(topics: Vec<ArticleTopic>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> impl Iterator<Item = &ArticleTopic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
