//! Domain entities - core business objects

mod message;
mod profile;
mod room;
mod topic;

pub use message::{Message, NewMessage, PREVIEW_LEN};
pub use profile::{NewProfile, Profile, DEFAULT_AVATAR};
pub use room::{NewRoom, Room};
pub use topic::{NewTopic, Topic};
