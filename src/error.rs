use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinksError {
    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// Remote resource fetch error (transport, timeout, body)
    #[error("Failed to fetch remote resource: {0}")]
    RemoteFetchError(String),

    #[error("Download API returned HTTP {status} for platform '{platform}'")]
    HttpStatus { platform: String, status: u16 },

    /// Serialization/Deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("README not found at: {path}")]
    ReadmeNotFound { path: PathBuf },

    /// Lock acquisition failed (another instance holds the history lock)
    #[error("Lock acquisition failed: {0}")]
    LockError(String),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, LinksError>;
