//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod account;
pub mod context;
pub mod error;
pub mod message;
pub mod profile;
pub mod room;
pub mod topic;

// Re-export all services for convenience
pub use account::AccountService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use profile::{Cleanup, ProfileSaved, ProfileService, AVATAR_MAX_DIM};
pub use room::RoomService;
pub use topic::TopicService;
