use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub markdown: MarkdownOptions,
    pub site: SiteConfig,
}

/// How ordered-list numbering is validated during classification.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListNumbering {
    /// Numbers must run 1, 2, 3, ... or the block is a paragraph.
    #[default]
    Strict,
    /// Only the `<digits>. ` marker on every line is checked.
    Lenient,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct MarkdownOptions {
    pub ordered_list_numbering: ListNumbering,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub static_dir: PathBuf,
    pub content_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            public_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(
            config.markdown.ordered_list_numbering,
            ListNumbering::Strict
        );
        assert_eq!(config.site.public_dir, PathBuf::from("public"));
        assert_eq!(config.site.template, PathBuf::from("template.html"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("site.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            "[markdown]\nordered_list_numbering = \"lenient\"\n\n[site]\npublic_dir = \"docs\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(
            config.markdown.ordered_list_numbering,
            ListNumbering::Lenient
        );
        assert_eq!(config.site.public_dir, PathBuf::from("docs"));
        assert_eq!(config.site.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[markdown]\nordered_list_numbering = \"sometimes\"\n").unwrap();

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
