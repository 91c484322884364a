//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Profile not found: {0}")]
    ProfileNotFound(RecordId),

    #[error("No profile for user: {0}")]
    ProfileNotFoundForUser(RecordId),

    #[error("Topic not found: {0}")]
    TopicNotFound(RecordId),

    #[error("Room not found: {0}")]
    RoomNotFound(RecordId),

    #[error("Message not found: {0}")]
    MessageNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid image path: {0}")]
    InvalidImagePath(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("User already has a profile")]
    ProfileAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ProfileNotFound(_) | Self::ProfileNotFoundForUser(_) => "UNKNOWN_PROFILE",
            Self::TopicNotFound(_) => "UNKNOWN_TOPIC",
            Self::RoomNotFound(_) => "UNKNOWN_ROOM",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidImagePath(_) => "INVALID_IMAGE_PATH",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound(_)
                | Self::ProfileNotFoundForUser(_)
                | Self::TopicNotFound(_)
                | Self::RoomNotFound(_)
                | Self::MessageNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::InvalidImagePath(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::ProfileAlreadyExists)
    }
}
