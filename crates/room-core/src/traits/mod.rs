//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CascadeRepository, MessageQuery, MessageRepository, ProfileRepository, RepoResult,
    RoomRepository, TopicRepository, UserPurge,
};
