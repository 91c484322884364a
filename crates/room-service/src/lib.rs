//! # room-service
//!
//! Application layer containing business logic, services, and DTOs.
//! The profile-image lifecycle (stale-file cleanup, bounded resize) lives in
//! [`services::ProfileService`].

pub mod dto;
pub mod services;

pub use services::{
    AccountService, Cleanup, MessageService, ProfileSaved, ProfileService, RoomService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, TopicService,
};
