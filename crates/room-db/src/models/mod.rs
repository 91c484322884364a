//! Database models - `FromRow` structs mirroring the schema

mod message;
mod profile;
mod room;
mod topic;

pub use message::MessageModel;
pub use profile::ProfileModel;
pub use room::RoomModel;
pub use topic::TopicModel;
