//! Request guards and typed session access.

pub mod api_key;
pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
