use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Invalid status code: {0:?} (use \"1\" for available or \"2\" for checked out)")]
    InvalidStatusCode(String),

    #[error("Library file {} is corrupt: {}", .path.display(), .reason)]
    CorruptStore { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
