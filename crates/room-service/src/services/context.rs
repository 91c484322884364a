//! Service context - dependency container for services
//!
//! Holds the repositories, the image store, and the per-user profile save
//! locks shared by all services.

use std::sync::Arc;

use room_core::traits::{
    CascadeRepository, MessageRepository, ProfileRepository, RoomRepository, TopicRepository,
};
use room_storage::ImageStore;

use super::profile::ProfileLocks;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The filesystem image store for avatars
/// - Per-user locks serializing profile saves
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    topic_repo: Arc<dyn TopicRepository>,
    room_repo: Arc<dyn RoomRepository>,
    message_repo: Arc<dyn MessageRepository>,
    cascade_repo: Arc<dyn CascadeRepository>,

    // Image storage
    image_store: Arc<ImageStore>,

    // Per-user profile save serialization
    profile_locks: Arc<ProfileLocks>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        room_repo: Arc<dyn RoomRepository>,
        message_repo: Arc<dyn MessageRepository>,
        cascade_repo: Arc<dyn CascadeRepository>,
        image_store: Arc<ImageStore>,
    ) -> Self {
        Self {
            profile_repo,
            topic_repo,
            room_repo,
            message_repo,
            cascade_repo,
            image_store,
            profile_locks: Arc::new(ProfileLocks::new()),
        }
    }

    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the topic repository
    pub fn topic_repo(&self) -> &dyn TopicRepository {
        self.topic_repo.as_ref()
    }

    /// Get the room repository
    pub fn room_repo(&self) -> &dyn RoomRepository {
        self.room_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the cascade repository
    pub fn cascade_repo(&self) -> &dyn CascadeRepository {
        self.cascade_repo.as_ref()
    }

    // === Storage ===

    /// Get the avatar image store
    pub fn image_store(&self) -> &ImageStore {
        self.image_store.as_ref()
    }

    pub(crate) fn profile_locks(&self) -> &ProfileLocks {
        self.profile_locks.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("image_store", &self.image_store)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    topic_repo: Option<Arc<dyn TopicRepository>>,
    room_repo: Option<Arc<dyn RoomRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    cascade_repo: Option<Arc<dyn CascadeRepository>>,
    image_store: Option<Arc<ImageStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn topic_repo(mut self, repo: Arc<dyn TopicRepository>) -> Self {
        self.topic_repo = Some(repo);
        self
    }

    pub fn room_repo(mut self, repo: Arc<dyn RoomRepository>) -> Self {
        self.room_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn cascade_repo(mut self, repo: Arc<dyn CascadeRepository>) -> Self {
        self.cascade_repo = Some(repo);
        self
    }

    pub fn image_store(mut self, store: Arc<ImageStore>) -> Self {
        self.image_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.topic_repo
                .ok_or_else(|| ServiceError::validation("topic_repo is required"))?,
            self.room_repo
                .ok_or_else(|| ServiceError::validation("room_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.cascade_repo
                .ok_or_else(|| ServiceError::validation("cascade_repo is required"))?,
            self.image_store
                .ok_or_else(|| ServiceError::validation("image_store is required"))?,
        ))
    }
}
