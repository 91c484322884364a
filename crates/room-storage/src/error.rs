//! Storage errors

use thiserror::Error;

/// Errors from the filesystem image store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Image file not found: {0}")]
    NotFound(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

impl StorageError {
    /// Check if this error means the file simply was not there
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
