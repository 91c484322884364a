//! Model → entity mappers

mod message;
mod profile;
mod room;
mod topic;

pub use room::room_with_participants;
