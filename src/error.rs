use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting markdown into an HTML tree.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unmatched delimiter `{delimiter}` in text: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    #[error("leaf node must have a value")]
    MissingValue,

    #[error("parent node must have a tag")]
    MissingTag,

    #[error("parent node must have children")]
    MissingChildren,

    #[error("unknown text token kind: {0}")]
    UnknownTokenKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while generating pages and copying site assets.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no h1 title found in {path}")]
    MissingTitle { path: PathBuf },

    #[error("failed to convert {path}: {source}")]
    Markdown { path: PathBuf, source: Error },
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| SiteError::Io { path, source }
    }
}
