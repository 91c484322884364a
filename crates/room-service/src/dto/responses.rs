//! Response DTOs for service operations
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Record IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use room_core::entities::{Message, Profile, Room, Topic, PREVIEW_LEN};
use room_core::traits::UserPurge;

// ============================================================================
// Profile Responses
// ============================================================================

/// Profile as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    /// Relative avatar path; falls back to the placeholder
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            image: profile.avatar_path().to_string(),
            email: profile.email.clone(),
        }
    }
}

/// Result of a profile save, including the cleanup outcome of the
/// image lifecycle
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSavedResponse {
    pub profile: ProfileResponse,
    /// True when a stale avatar file could not be deleted; the save itself
    /// still succeeded
    pub cleanup_failed: bool,
}

// ============================================================================
// Topic Responses
// ============================================================================

/// Topic as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct TopicResponse {
    pub id: String,
    pub name: String,
    pub user_id: String,
}

impl From<&Topic> for TopicResponse {
    fn from(topic: &Topic) -> Self {
        Self {
            id: topic.id.to_string(),
            name: topic.name.clone(),
            user_id: topic.user_id.to_string(),
        }
    }
}

// ============================================================================
// Room Responses
// ============================================================================

/// Room as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: String,
    pub host_id: String,
    pub topic_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.to_string(),
            host_id: room.host_id.to_string(),
            topic_id: room.topic_id.to_string(),
            name: room.name.clone(),
            description: room.description.clone(),
            participants: room.participants.iter().map(ToString::to_string).collect(),
            created_at: room.created_at,
            updated_at: room.updated_at,
        }
    }
}

// ============================================================================
// Message Responses
// ============================================================================

/// Message as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub user_id: String,
    pub room_id: String,
    pub body: String,
    /// First 50 characters, for listings and notifications
    pub preview: String,
    pub edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            user_id: message.user_id.to_string(),
            room_id: message.room_id.to_string(),
            body: message.body.clone(),
            preview: message.preview(PREVIEW_LEN).to_string(),
            edited: message.is_edited(),
            created_at: message.created_at,
            updated_at: message.updated_at,
        }
    }
}

// ============================================================================
// Account Responses
// ============================================================================

/// What a user purge removed
#[derive(Debug, Clone, Serialize)]
pub struct PurgeResponse {
    pub profile_deleted: bool,
    pub topics_deleted: u64,
    pub rooms_deleted: u64,
    pub messages_deleted: u64,
    /// True when the avatar file was present and deleted
    pub avatar_removed: bool,
}

impl PurgeResponse {
    pub fn from_purge(purge: &UserPurge, avatar_removed: bool) -> Self {
        Self {
            profile_deleted: purge.profile_deleted,
            topics_deleted: purge.topics_deleted,
            rooms_deleted: purge.rooms_deleted,
            messages_deleted: purge.messages_deleted,
            avatar_removed,
        }
    }
}
