//! Profile entity - per-user extension record holding avatar and contact metadata

use crate::value_objects::{ImageRef, RecordId};

/// Placeholder served when a profile has no uploaded avatar.
///
/// The placeholder is shared by all profiles and is never deleted or resized
/// by the image lifecycle.
pub const DEFAULT_AVATAR: &str = "default.jpg";

/// Profile entity, one-to-one with a user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: RecordId,
    pub user_id: RecordId,
    /// Uploaded avatar, `None` means the default placeholder
    pub image: Option<ImageRef>,
    pub email: Option<String>,
}

impl Profile {
    /// Relative path of the avatar to display, falling back to the placeholder
    pub fn avatar_path(&self) -> &str {
        self.image.as_ref().map_or(DEFAULT_AVATAR, ImageRef::as_str)
    }

    /// Check if the profile has its own uploaded avatar
    #[inline]
    pub fn has_custom_avatar(&self) -> bool {
        self.image.is_some()
    }

    /// Replace the avatar reference
    pub fn set_image(&mut self, image: ImageRef) {
        self.image = Some(image);
    }

    /// Drop the avatar reference, reverting to the placeholder
    pub fn clear_image(&mut self) {
        self.image = None;
    }
}

/// Field values for a profile that has not been persisted yet.
///
/// The repository assigns the record ID on insert.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: RecordId,
    pub image: Option<ImageRef>,
    pub email: Option<String>,
}

impl NewProfile {
    /// Create a profile draft for a user with no avatar and no email
    pub fn for_user(user_id: RecordId) -> Self {
        Self {
            user_id,
            image: None,
            email: None,
        }
    }
}
