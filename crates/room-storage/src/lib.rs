//! # room-storage
//!
//! Filesystem image store for uploaded avatars. Resolves `ImageRef`s under
//! an upload root and provides the operations the profile-image lifecycle
//! needs: existence check, best-effort delete, and bounded downscale.

mod error;
mod image_store;

pub use error::StorageError;
pub use image_store::{FitOutcome, ImageStore};
