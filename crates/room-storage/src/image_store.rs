//! Filesystem image store

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use room_core::ImageRef;

use crate::error::StorageError;

/// Result of a `fit_within` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitOutcome {
    /// Image was within bounds and left untouched
    Untouched { width: u32, height: u32 },
    /// Image exceeded the bounds and was overwritten with a downscaled copy
    Resized { width: u32, height: u32 },
}

impl FitOutcome {
    /// Final on-disk dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        match *self {
            Self::Untouched { width, height } | Self::Resized { width, height } => (width, height),
        }
    }
}

/// Store for uploaded avatar images rooted at the upload directory.
///
/// All paths are `ImageRef`s, already validated to stay under the root.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Create a store rooted at the given upload directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The upload root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of an image under the upload root
    pub fn resolve(&self, image: &ImageRef) -> PathBuf {
        self.root.join(image.as_str())
    }

    /// Check if the image file exists
    pub fn exists(&self, image: &ImageRef) -> bool {
        self.resolve(image).is_file()
    }

    /// Delete an image file.
    ///
    /// A missing file is not an error: the goal is "this reference no longer
    /// has a file", which already holds.
    #[instrument(skip(self))]
    pub fn remove(&self, image: &ImageRef) -> Result<(), StorageError> {
        let path = self.resolve(image);
        if !path.is_file() {
            debug!(image = %image, "Image file already absent, nothing to delete");
            return Ok(());
        }

        fs::remove_file(&path).map_err(|source| StorageError::Io {
            path: path.display().to_string(),
            source,
        })?;

        debug!(image = %image, "Deleted image file");
        Ok(())
    }

    /// Downscale an image in place so neither dimension exceeds `max_dim`.
    ///
    /// Aspect ratio is preserved and images already within bounds are left
    /// untouched, so repeated calls are idempotent and nothing is ever
    /// upscaled. The decoded pixels are dropped before this returns; only
    /// the overwritten file survives.
    #[instrument(skip(self))]
    pub fn fit_within(&self, image: &ImageRef, max_dim: u32) -> Result<FitOutcome, StorageError> {
        let path = self.resolve(image);
        if !path.is_file() {
            return Err(StorageError::NotFound(image.as_str().to_string()));
        }

        let img = image::open(&path).map_err(|source| StorageError::Decode {
            path: path.display().to_string(),
            source,
        })?;

        let (width, height) = (img.width(), img.height());
        if width <= max_dim && height <= max_dim {
            return Ok(FitOutcome::Untouched { width, height });
        }

        let resized = img.thumbnail(max_dim, max_dim);
        resized.save(&path).map_err(|source| StorageError::Encode {
            path: path.display().to_string(),
            source,
        })?;

        debug!(
            image = %image,
            from = format_args!("{width}x{height}"),
            to = format_args!("{}x{}", resized.width(), resized.height()),
            "Resized image to fit bounds"
        );

        Ok(FitOutcome::Resized {
            width: resized.width(),
            height: resized.height(),
        })
    }
}
