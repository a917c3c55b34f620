use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// A directory listing failed during a scan. `path` is the directory
    /// that could not be read, which is the asset root itself unless the
    /// failure happened inside a subdirectory.
    #[error("sound directory '{}' cannot be read: {source}", path.display())]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no clip or group named '{0}'")]
    NotFound(String),

    #[error("group '{0}' has no numbered tracks")]
    EmptyGroup(String),

    #[error("invalid track number {requested} for group '{group}': choose a number between 1 and {count}")]
    TrackOutOfRange {
        group: String,
        requested: usize,
        count: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
