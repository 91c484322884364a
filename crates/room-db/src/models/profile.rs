//! Profile database model

use sqlx::FromRow;

/// Database model for the profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub image: Option<String>,
    pub email: Option<String>,
}

impl ProfileModel {
    /// Check if the profile has an uploaded avatar
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
