//! HTTP request handlers.
//!
//! Controllers check access, convert DTOs to parameters, call services and convert the
//! resulting domain models back to DTOs.

pub mod auth;
pub mod bot;
pub mod guild;
pub mod sync;
pub mod user;

#[cfg(test)]
mod test;
