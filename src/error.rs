use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading chat logs
#[derive(Debug, Error)]
pub enum ChatLogError {
    /// A log file could not be opened or was not valid UTF-8
    #[error("failed to read chat log {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log folder could not be listed
    #[error("failed to list chat log folder {path:?}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report failed
    #[error("failed to write report")]
    Write(#[from] std::io::Error),

    #[error("failed to encode report as JSON")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChatLogError>;
