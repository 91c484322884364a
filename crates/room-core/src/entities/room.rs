//! Room entity - a chat channel owned by a host user under a topic

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::RecordId;

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RecordId,
    pub host_id: RecordId,
    pub topic_id: RecordId,
    pub name: String,
    pub description: Option<String>,
    /// Users who joined the room. A reference, not ownership: deleting a
    /// participant's account does not delete the room.
    pub participants: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Check if a user has joined this room
    pub fn is_participant(&self, user_id: RecordId) -> bool {
        self.participants.contains(&user_id)
    }

    /// Update the room name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the room description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Move the room under another topic
    pub fn set_topic(&mut self, topic_id: RecordId) {
        self.topic_id = topic_id;
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Field values for a room that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub host_id: RecordId,
    pub topic_id: RecordId,
    pub name: String,
    pub description: Option<String>,
}
