use std::{io, path::PathBuf};

use gpui::SharedString;
use thiserror::Error;

pub type ThemeResult<T> = std::result::Result<T, ThemeError>;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("no theme with id \"{0}\" is registered")]
    UnknownTheme(SharedString),
    #[error("invalid persist key \"{0}\"")]
    InvalidPersistKey(String),
    #[error("failed to read theme file: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to write theme file: {path}")]
    WriteConfig { path: PathBuf, source: io::Error },
    #[error("failed to list theme directory: {path}")]
    ReadDir { path: PathBuf, source: io::Error },
    #[error("failed to parse theme file: {path}")]
    ParseTheme {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to parse theme data")]
    ParseConfig(#[from] serde_json::Error),
}

impl ThemeError {
    /// Whether the failure came from a storage backend rather than a registry lookup.
    pub fn is_storage(&self) -> bool {
        !matches!(self, Self::UnknownTheme(_))
    }
}
