use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirtreeError {
    #[error("Path '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("Path '{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DirtreeError>;
