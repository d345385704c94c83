//! Shared-secret authentication for the Config Sync API.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, AppError},
    state::AppState,
};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Extractor that only succeeds when the request carries the configured API key.
///
/// Place it before body extractors so unauthenticated requests are rejected before
/// their payload is read.
pub struct SyncApiKey;

impl FromRequestParts<AppState> for SyncApiKey {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());

        match provided {
            Some(key) if keys_match(key, &state.config.dashboard_api_key) => Ok(SyncApiKey),
            _ => {
                tracing::warn!("Rejected Config Sync API request with missing or invalid key");
                Err(AuthError::InvalidApiKey.into())
            }
        }
    }
}

/// Compares two keys without stopping at the first differing byte.
fn keys_match(provided: &str, expected: &str) -> bool {
    let (provided, expected) = (provided.as_bytes(), expected.as_bytes());
    if provided.len() != expected.len() {
        return false;
    }

    provided
        .iter()
        .zip(expected)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
