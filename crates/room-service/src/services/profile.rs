//! Profile service
//!
//! Owns the profile-image lifecycle: every save persists the record first,
//! then sweeps the stale avatar file, then bounds the new avatar's
//! dimensions. Saves for the same user are serialized so two concurrent
//! saves cannot both read the same "old image" and race the cleanup.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, instrument, warn};
use validator::Validate;

use room_core::entities::{NewProfile, Profile};
use room_core::error::DomainError;
use room_core::value_objects::{ImageRef, RecordId};

use crate::dto::{CreateProfileRequest, ProfileResponse, ProfileSavedResponse, UpdateProfileRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Bounding box applied to stored avatars; neither dimension may exceed this
pub const AVATAR_MAX_DIM: u32 = 300;

/// Outcome of the stale-file sweep that runs after a profile save.
///
/// `Failed` means the record was saved but the old avatar file could not be
/// deleted; the save itself is still a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleanup {
    /// No stale file, or it was deleted
    Clean,
    /// A stale file was left behind
    Failed,
}

impl Cleanup {
    #[inline]
    pub fn failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// A persisted profile together with the cleanup outcome of its save
#[derive(Debug, Clone)]
pub struct ProfileSaved {
    pub profile: Profile,
    pub cleanup: Cleanup,
}

impl From<&ProfileSaved> for ProfileSavedResponse {
    fn from(saved: &ProfileSaved) -> Self {
        Self {
            profile: ProfileResponse::from(&saved.profile),
            cleanup_failed: saved.cleanup.failed(),
        }
    }
}

/// Per-user async locks serializing profile saves.
///
/// Entries are never removed; the map grows with the number of distinct
/// users saving profiles in this process, which is bounded by the user base.
pub(crate) struct ProfileLocks {
    locks: DashMap<RecordId, Arc<Mutex<()>>>,
}

impl ProfileLocks {
    pub(crate) fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    pub(crate) async fn acquire(&self, user_id: RecordId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(user_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get profile by ID
    #[instrument(skip(self))]
    pub async fn get_profile(&self, profile_id: RecordId) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", profile_id.to_string()))?;

        Ok(ProfileResponse::from(&profile))
    }

    /// Get the profile owned by a user
    #[instrument(skip(self))]
    pub async fn get_profile_by_user(&self, user_id: RecordId) -> ServiceResult<ProfileResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;

        Ok(ProfileResponse::from(&profile))
    }

    /// Create a profile for a user.
    ///
    /// There is no old image on the create path, so only the resize step of
    /// the image lifecycle applies.
    #[instrument(skip(self, request))]
    pub async fn create_profile(
        &self,
        user_id: RecordId,
        request: CreateProfileRequest,
    ) -> ServiceResult<ProfileSaved> {
        request.validate()?;
        let image = request.image.map(ImageRef::new).transpose()?;

        if let Some(email) = &request.email {
            self.ensure_email_free(email).await?;
        }

        let _guard = self.ctx.profile_locks().acquire(user_id).await;

        let profile = self
            .ctx
            .profile_repo()
            .create(&NewProfile {
                user_id,
                image,
                email: request.email,
            })
            .await?;

        // Resize after the record is persisted; a decode failure surfaces to
        // the caller while the row stays (partial success, by contract).
        self.bound_avatar(&profile).await?;

        info!(user_id = %user_id, profile_id = %profile.id, "Profile created");

        Ok(ProfileSaved {
            profile,
            cleanup: Cleanup::Clean,
        })
    }

    /// Update a user's profile, running the full image lifecycle:
    /// fetch prior state, persist, sweep the stale file, bound the new image.
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: RecordId,
        request: UpdateProfileRequest,
    ) -> ServiceResult<ProfileSaved> {
        request.validate()?;
        let new_image = request.image.map(ImageRef::new).transpose()?;

        let _guard = self.ctx.profile_locks().acquire(user_id).await;

        // Prior persisted state; this read and everything below happen under
        // the per-user lock, so no concurrent save can interleave.
        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", user_id.to_string()))?;
        let old_image = profile.image.clone();

        if let Some(email) = request.email {
            // Re-saving the current address is not a conflict
            if profile.email.as_deref() != Some(email.as_str()) {
                self.ensure_email_free(&email).await?;
            }
            profile.email = Some(email);
        }
        if request.remove_image {
            profile.clear_image();
        }
        if let Some(image) = new_image {
            profile.set_image(image);
        }

        // Persist before touching any files: a file error must never block
        // the record update.
        self.ctx.profile_repo().update(&profile).await?;

        let cleanup = self.sweep_stale_image(profile.image.as_ref(), old_image.as_ref());
        self.bound_avatar(&profile).await?;

        info!(user_id = %user_id, profile_id = %profile.id, "Profile updated");

        Ok(ProfileSaved { profile, cleanup })
    }

    /// Delete a profile, removing its avatar file best-effort
    #[instrument(skip(self))]
    pub async fn delete_profile(&self, profile_id: RecordId) -> ServiceResult<Cleanup> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Profile", profile_id.to_string()))?;

        let _guard = self.ctx.profile_locks().acquire(profile.user_id).await;

        self.ctx.profile_repo().delete(profile_id).await?;

        let cleanup = self.sweep_stale_image(None, profile.image.as_ref());

        info!(profile_id = %profile_id, "Profile deleted");
        Ok(cleanup)
    }

    /// Reject an email address another profile already claims.
    ///
    /// The UNIQUE constraint still backs this up at insert time; checking
    /// here keeps the conflict out of the image lifecycle.
    async fn ensure_email_free(&self, email: &str) -> ServiceResult<()> {
        if self.ctx.profile_repo().email_exists(email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        Ok(())
    }

    /// Delete the old avatar file when the save replaced or removed it.
    ///
    /// Replacement (new != old) and removal (new absent) are mutually
    /// exclusive; an unchanged image sweeps nothing. Failures are logged and
    /// reported in the outcome, never raised: the record save must not fail
    /// because stale-file cleanup did.
    fn sweep_stale_image(&self, new: Option<&ImageRef>, old: Option<&ImageRef>) -> Cleanup {
        let stale = match (new, old) {
            (Some(new), Some(old)) if new != old => Some(old),
            (None, Some(old)) => Some(old),
            _ => None,
        };

        let Some(stale) = stale else {
            return Cleanup::Clean;
        };

        match self.ctx.image_store().remove(stale) {
            Ok(()) => Cleanup::Clean,
            Err(e) => {
                warn!(image = %stale, error = %e, "Failed to delete stale avatar file");
                Cleanup::Failed
            }
        }
    }

    /// Downscale the profile's avatar in place if either dimension exceeds
    /// [`AVATAR_MAX_DIM`]. No-op for the default placeholder.
    async fn bound_avatar(&self, profile: &Profile) -> ServiceResult<()> {
        if let Some(image) = &profile.image {
            self.ctx.image_store().fit_within(image, AVATAR_MAX_DIM)?;
        }
        Ok(())
    }
}
