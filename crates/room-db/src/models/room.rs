//! Room database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the rooms table.
///
/// Participants live in the room_participants join table and are loaded
/// separately.
#[derive(Debug, Clone, FromRow)]
pub struct RoomModel {
    pub id: i64,
    pub host_id: i64,
    pub topic_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
