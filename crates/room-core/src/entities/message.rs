//! Message entity - a chat message posted in a room

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::RecordId;

/// Number of characters shown by the debug/admin rendering
pub const PREVIEW_LEN: usize = 50;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: RecordId,
    /// Author
    pub user_id: RecordId,
    pub room_id: RecordId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Message {
    /// Check if the message was edited after posting
    #[inline]
    pub fn is_edited(&self) -> bool {
        self.updated_at > self.created_at
    }

    /// Check if the body is blank
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Edit the body
    pub fn edit(&mut self, body: String) {
        self.body = body;
        self.updated_at = Utc::now();
    }

    /// Get a truncated preview of the body (for listings and notifications)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.body.len() <= max_len {
            &self.body
        } else {
            let mut end = max_len;
            while !self.body.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.body[..end]
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.preview(PREVIEW_LEN))
    }
}

/// Field values for a message that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub user_id: RecordId,
    pub room_id: RecordId,
    pub body: String,
}
