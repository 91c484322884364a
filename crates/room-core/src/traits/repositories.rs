//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Message, NewMessage, NewProfile, NewRoom, NewTopic, Profile, Room, Topic};
use crate::error::DomainError;
use crate::value_objects::{ImageRef, RecordId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Profile>>;

    /// Find the profile owned by a user
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Option<Profile>>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a new profile; the database assigns the ID.
    /// Fails with `EmailAlreadyExists` on a duplicate email and
    /// `ProfileAlreadyExists` if the user already has one.
    async fn create(&self, profile: &NewProfile) -> RepoResult<Profile>;

    /// Update an existing profile's image and email
    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    /// Delete a profile
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Topic Repository
// ============================================================================

#[async_trait]
pub trait TopicRepository: Send + Sync {
    /// Find topic by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Topic>>;

    /// Find topics by exact name. Names are not unique, so this may return
    /// several; deduplication is the caller's concern.
    async fn find_by_name(&self, name: &str) -> RepoResult<Vec<Topic>>;

    /// List topics created by a user
    async fn list_by_user(&self, user_id: RecordId) -> RepoResult<Vec<Topic>>;

    /// Insert a new topic; the database assigns the ID
    async fn create(&self, topic: &NewTopic) -> RepoResult<Topic>;

    /// Update an existing topic
    async fn update(&self, topic: &Topic) -> RepoResult<()>;

    /// Delete a topic, cascading to its rooms and their messages
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Room Repository
// ============================================================================

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find room by ID, with participants loaded
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Room>>;

    /// List all rooms, newest-created first
    async fn list(&self) -> RepoResult<Vec<Room>>;

    /// List rooms under a topic, newest-created first
    async fn list_by_topic(&self, topic_id: RecordId) -> RepoResult<Vec<Room>>;

    /// List rooms hosted by a user, newest-created first
    async fn list_by_host(&self, host_id: RecordId) -> RepoResult<Vec<Room>>;

    /// Insert a new room; the database assigns the ID and timestamps
    async fn create(&self, room: &NewRoom) -> RepoResult<Room>;

    /// Update an existing room's name, description, and topic
    async fn update(&self, room: &Room) -> RepoResult<()>;

    /// Delete a room, cascading to its messages and participant rows
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    /// Add a user to the room's participants (idempotent)
    async fn add_participant(&self, room_id: RecordId, user_id: RecordId) -> RepoResult<()>;

    /// Remove a user from the room's participants
    async fn remove_participant(&self, room_id: RecordId, user_id: RecordId) -> RepoResult<()>;

    /// Get the participant user IDs of a room
    async fn participants(&self, room_id: RecordId) -> RepoResult<Vec<RecordId>>;
}

// ============================================================================
// Message Repository
// ============================================================================

/// Pagination options for message listings
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageQuery {
    /// Only messages older than this ID
    pub before: Option<RecordId>,
    pub limit: i64,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Message>>;

    /// List messages in a room, newest-created first, with cursor pagination
    async fn find_by_room(&self, room_id: RecordId, query: MessageQuery)
        -> RepoResult<Vec<Message>>;

    /// Insert a new message; the database assigns the ID and timestamps
    async fn create(&self, message: &NewMessage) -> RepoResult<Message>;

    /// Update a message's body (edit)
    async fn update(&self, message: &Message) -> RepoResult<()>;

    /// Delete a message
    async fn delete(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Cascade Repository
// ============================================================================

/// What a user purge removed.
///
/// `profile_image` is handed back so the caller can clean the avatar file;
/// the database layer never touches the filesystem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPurge {
    pub profile_deleted: bool,
    pub profile_image: Option<ImageRef>,
    pub topics_deleted: u64,
    pub rooms_deleted: u64,
    pub messages_deleted: u64,
}

#[async_trait]
pub trait CascadeRepository: Send + Sync {
    /// Delete everything owned by a user in one transaction: authored
    /// messages, participant rows, rooms hosted by the user or under the
    /// user's topics, the user's topics, and the profile row.
    ///
    /// Purging a user with no records is a no-op and returns an empty report.
    async fn purge_user(&self, user_id: RecordId) -> RepoResult<UserPurge>;
}
