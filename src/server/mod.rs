//! Dashboard backend.
//!
//! Two audiences share one Axum router: server administrators, who sign in with
//! Discord and edit their guilds through the `/api` routes, and the bot process,
//! which reads and writes guild data through the Config Sync API under `/guild`
//! using a shared key.
//!
//! # Layout
//!
//! - `controller/` - Handlers; check access and map DTOs to parameters
//! - `service/` - Orchestrates repositories, the Discord login flow and the bot API proxy
//! - `data/` - SeaORM repositories returning domain models
//! - `model/` - Domain models and parameter types
//! - `middleware/` - Session wrappers, the login guard and the sync key extractor
//! - `error/` - `AppError` and its HTTP mapping
//! - `config`, `startup`, `state`, `router`, `util/` - Process wiring
//!
//! Handlers never touch entities directly: repositories convert entity models into
//! domain models, and controllers convert those into DTOs on the way out.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
