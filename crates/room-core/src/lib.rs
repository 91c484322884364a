//! # room-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, filesystem, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Message, NewMessage, NewProfile, NewRoom, NewTopic, Profile, Room, Topic, DEFAULT_AVATAR,
};
pub use error::DomainError;
pub use traits::{
    CascadeRepository, MessageQuery, MessageRepository, ProfileRepository, RepoResult,
    RoomRepository, TopicRepository, UserPurge,
};
pub use value_objects::{ImageRef, RecordId};
