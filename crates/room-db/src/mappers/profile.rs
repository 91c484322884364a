//! Profile model <-> entity mapper

use room_core::entities::Profile;
use room_core::error::DomainError;
use room_core::value_objects::{ImageRef, RecordId};

use crate::models::ProfileModel;

/// Convert ProfileModel to Profile entity.
///
/// Fallible: the image column is re-validated on the way out, so a row
/// written around the application (or corrupted) cannot smuggle in an
/// unsafe path.
impl TryFrom<ProfileModel> for Profile {
    type Error = DomainError;

    fn try_from(model: ProfileModel) -> Result<Self, Self::Error> {
        let image = model.image.map(ImageRef::new).transpose()?;
        Ok(Profile {
            id: RecordId::new(model.id),
            user_id: RecordId::new(model.user_id),
            image,
            email: model.email,
        })
    }
}
