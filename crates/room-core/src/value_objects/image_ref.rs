//! Image reference - validated relative path to a stored avatar file

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Reference to an uploaded image, stored as a path relative to the upload
/// root (e.g. `profile_pics/alice.jpg`).
///
/// Equality is by the stored reference string, never by file content. Two
/// profiles pointing at the same path compare equal even if the file changed
/// on disk in between.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Validate and wrap a relative image path.
    ///
    /// Rejects empty paths, absolute paths, and paths containing
    /// parent-directory components, so a reference can never escape the
    /// upload root.
    pub fn new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();

        if path.trim().is_empty() {
            return Err(DomainError::InvalidImagePath("empty path".to_string()));
        }
        if path.starts_with('/') || path.starts_with('\\') || path.contains(':') {
            return Err(DomainError::InvalidImagePath(path));
        }
        if path.split(['/', '\\']).any(|seg| seg == "..") {
            return Err(DomainError::InvalidImagePath(path));
        }

        Ok(Self(path))
    }

    /// Get the relative path as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the reference and return the owned path
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
