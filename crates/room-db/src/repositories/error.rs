//! Error handling utilities for repositories

use room_core::error::DomainError;
use room_core::value_objects::RecordId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "profile not found" error
pub fn profile_not_found(id: RecordId) -> DomainError {
    DomainError::ProfileNotFound(id)
}

/// Create a "topic not found" error
pub fn topic_not_found(id: RecordId) -> DomainError {
    DomainError::TopicNotFound(id)
}

/// Create a "room not found" error
pub fn room_not_found(id: RecordId) -> DomainError {
    DomainError::RoomNotFound(id)
}

/// Create a "message not found" error
pub fn message_not_found(id: RecordId) -> DomainError {
    DomainError::MessageNotFound(id)
}
