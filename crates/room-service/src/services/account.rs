//! Account service
//!
//! Handles deletion of a user account's footprint in the content model:
//! profile, topics, rooms, messages, and the avatar file.

use tracing::{info, instrument, warn};

use room_core::value_objects::RecordId;

use crate::dto::PurgeResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Remove everything a user owns: authored messages, joined rooms'
    /// membership, hosted rooms, topics, profile, and the avatar file.
    ///
    /// The database purge runs in one transaction; the avatar file is
    /// removed afterwards best-effort, since a leftover file must not fail
    /// the account deletion.
    #[instrument(skip(self))]
    pub async fn purge_user(&self, user_id: RecordId) -> ServiceResult<PurgeResponse> {
        let _guard = self.ctx.profile_locks().acquire(user_id).await;

        let purge = self.ctx.cascade_repo().purge_user(user_id).await?;

        let avatar_removed = match &purge.profile_image {
            Some(image) if self.ctx.image_store().exists(image) => match self.ctx.image_store().remove(image) {
                Ok(()) => true,
                Err(e) => {
                    warn!(user_id = %user_id, image = %image, error = %e,
                        "Failed to delete avatar file during purge");
                    false
                }
            },
            _ => false,
        };

        info!(
            user_id = %user_id,
            topics = purge.topics_deleted,
            rooms = purge.rooms_deleted,
            messages = purge.messages_deleted,
            "User purged"
        );

        Ok(PurgeResponse::from_purge(&purge, avatar_removed))
    }
}
