//! Business logic layer.
//!
//! Services orchestrate repositories and external clients for the controllers. They
//! take borrowed handles from `AppState` and return domain models.

pub mod auth;
pub mod bot_api;
pub mod dashboard;
pub mod giveaway;
pub mod guild_config;
pub mod moderation;
