//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let config = factory::guild_config::create_guild_config(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let config = factory::guild_config::GuildConfigFactory::new(&db)
//!     .guild_id("42")
//!     .prefix("?")
//!     .custom_commands(Some("{\"hello\":\"world\"}"))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create dashboard user entities
//! - `guild_config` - Create guild configuration entities
//! - `moderation_log` - Create moderation log entries
//! - `giveaway` - Create giveaway entities
//! - `helpers` - Shared ID generation

pub mod giveaway;
pub mod guild_config;
pub mod helpers;
pub mod moderation_log;
pub mod user;

pub use giveaway::create_giveaway;
pub use guild_config::create_guild_config;
pub use moderation_log::create_moderation_log;
pub use user::create_user;
