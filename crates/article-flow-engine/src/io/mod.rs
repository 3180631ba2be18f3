use crate::models::Catalog;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Article not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid catalog file {path}: {source}")]
    InvalidCatalog {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid articles directory: {0}")]
    InvalidArticlesDir(String),
}

/// Load the article catalog from its JSON index (an ordered array of
/// records with `title`, `link` and `image_links` fields).
pub fn load_catalog(path: &Path) -> Result<Catalog, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    serde_json::from_str(&content).map_err(|source| IoError::InvalidCatalog {
        path: path.to_path_buf(),
        source,
    })
}

/// Read one article's raw markdown by its catalog link key.
///
/// The key may come with or without the `.md` extension. Resolution and
/// error policy for a missing resource (render "content not available")
/// belong to the caller.
pub fn read_article(link: &str, articles_root: &Path) -> Result<String, IoError> {
    let file_name = if link.ends_with(".md") {
        link.to_string()
    } else {
        format!("{link}.md")
    };
    let path = articles_root.join(file_name);
    if !path.exists() {
        return Err(IoError::NotFound(path));
    }
    fs::read_to_string(&path).map_err(IoError::Io)
}

/// Scan an articles directory for markdown files, sorted by path.
pub fn scan_articles(articles_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !articles_root.exists() {
        return Err(IoError::InvalidArticlesDir(
            "articles directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(articles_root).map_err(IoError::Io)? {
        let path = entry.map_err(IoError::Io)?.path();
        if path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

pub fn validate_articles_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidArticlesDir(
            "Directory does not exist".to_string(),
        ));
    }
    Ok(())
}
