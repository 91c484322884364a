//! Data transfer objects for service requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for inputs
//! - Response DTOs for serializing outputs

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateProfileRequest, CreateRoomRequest, CreateTopicRequest, PostMessageRequest,
    UpdateProfileRequest, UpdateRoomRequest,
};

// Re-export commonly used response types
pub use responses::{
    MessageResponse, ProfileResponse, ProfileSavedResponse, PurgeResponse, RoomResponse,
    TopicResponse,
};
