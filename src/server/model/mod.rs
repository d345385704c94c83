//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod dashboard;
pub mod discord;
pub mod giveaway;
pub mod guild_config;
pub mod moderation;
pub mod user;
