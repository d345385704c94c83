//! SeaORM entities for the guild dashboard database.

pub mod prelude;

pub mod giveaway;
pub mod guild_config;
pub mod moderation_log;
pub mod user;
