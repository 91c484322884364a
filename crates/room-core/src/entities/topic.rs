//! Topic entity - a named subject rooms are hosted under

use std::fmt;

use crate::value_objects::RecordId;

/// Topic entity.
///
/// Names are not unique; duplicates are permitted and deduplication is the
/// caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: RecordId,
    pub name: String,
    /// Creating user
    pub user_id: RecordId,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Field values for a topic that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewTopic {
    pub name: String,
    pub user_id: RecordId,
}
