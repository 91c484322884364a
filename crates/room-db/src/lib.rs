//! # room-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `room-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations, including the explicit user-cascade purge
//!
//! ## Usage
//!
//! ```rust,ignore
//! use room_common::AppConfig;
//! use room_db::pool::{create_pool, run_migrations};
//! use room_db::repositories::PgProfileRepository;
//! use room_core::traits::ProfileRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     run_migrations(&pool).await?;
//!     let profile_repo = PgProfileRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{
    PgCascadeRepository, PgMessageRepository, PgProfileRepository, PgRoomRepository,
    PgTopicRepository,
};
