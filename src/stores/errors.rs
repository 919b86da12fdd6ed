//! Store errors.

use std::io;

use thiserror::Error;

/// Infrastructure failures reported by item and category stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("failed to access menu storage")]
    Io(#[from] io::Error),

    /// The backing file could not be parsed or serialised.
    #[error("failed to parse menu storage: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A record was rejected before being written.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A record with the same identifier is already stored.
    #[error("record already exists: {0}")]
    AlreadyExists(String),
}
