//! Request DTOs for service operations
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Profile Requests
// ============================================================================

/// Create a profile for a user
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct CreateProfileRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Relative path of an already-uploaded avatar file
    pub image: Option<String>,
}

/// Update an existing profile.
///
/// `image` and `remove_image` mirror an upload form: a new file path, or a
/// "remove avatar" checkbox. Setting both removes first, so the new image
/// wins.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Relative path of a newly uploaded avatar file
    pub image: Option<String>,

    /// Drop the current avatar, reverting to the placeholder
    #[serde(default)]
    pub remove_image: bool,
}

// ============================================================================
// Topic Requests
// ============================================================================

/// Create a topic
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTopicRequest {
    #[validate(length(min = 1, max = 200, message = "Topic name must be 1-200 characters"))]
    pub name: String,
}

// ============================================================================
// Room Requests
// ============================================================================

/// Create a room under a topic
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    pub topic_id: i64,

    #[validate(length(min = 1, max = 200, message = "Room name must be 1-200 characters"))]
    pub name: String,

    pub description: Option<String>,
}

/// Update a room.
///
/// An absent `description` means "no change"; `remove_description` clears
/// it. Setting both clears first, so the new description wins.
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateRoomRequest {
    #[validate(length(min = 1, max = 200, message = "Room name must be 1-200 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    /// Drop the current description
    #[serde(default)]
    pub remove_description: bool,

    pub topic_id: Option<i64>,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Post a message to a room
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostMessageRequest {
    #[validate(length(min = 1, message = "Message body must not be empty"))]
    pub body: String,
}
