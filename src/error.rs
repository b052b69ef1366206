// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelixdocError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Snapshot parse error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HelixdocError>;

// Allow `?` on std::io::Error by converting to HelixdocError::Io with unknown path.
impl From<std::io::Error> for HelixdocError {
    fn from(source: std::io::Error) -> Self {
        HelixdocError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
