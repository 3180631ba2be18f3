use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Layout knobs for the rendering pipeline, overriding the engine defaults
/// when set. Lives in the optional `[render]` table of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Container width in layout units; unset keeps the engine default.
    pub max_width: Option<f32>,
    /// Gap between inline elements on a line.
    pub spacing: Option<f32>,
    /// Gap between wrapped lines.
    pub line_spacing: Option<f32>,
}

/// On-disk configuration: where the article files and their JSON index
/// live, plus optional render overrides.
///
/// ```toml
/// articles_path = "~/articles"
///
/// [render]
/// max_width = 480.0
/// line_spacing = 6.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub articles_path: PathBuf,
    #[serde(default)]
    pub render: RenderSettings,
}

impl Config {
    /// Loads from the default location. A missing file is not an error;
    /// the caller falls back to command-line arguments.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.articles_path = expand_path(&config.articles_path);
        Ok(Some(config))
    }

    pub fn save_to_path(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/article-flow");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

/// Expands `~` and environment variables; an unexpandable path is kept
/// verbatim rather than rejected.
fn expand_path(path: &Path) -> PathBuf {
    match shellexpand::full(&path.to_string_lossy()) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
