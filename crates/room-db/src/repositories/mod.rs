//! PostgreSQL repository implementations

mod cascade;
mod error;
mod message;
mod profile;
mod room;
mod topic;

pub use cascade::PgCascadeRepository;
pub use message::PgMessageRepository;
pub use profile::PgProfileRepository;
pub use room::PgRoomRepository;
pub use topic::PgTopicRepository;
