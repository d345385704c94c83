//! JSON data transfer objects shared by the HTTP API.
//!
//! These types describe exactly what goes over the wire. Server-side domain models
//! convert into them at the controller boundary.

pub mod api;
pub mod bot;
pub mod dashboard;
pub mod discord;
pub mod giveaway;
pub mod guild_config;
pub mod moderation;
pub mod user;
