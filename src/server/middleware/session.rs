//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! # Architecture
//!
//! Session management is split into focused concerns:
//! - `AuthSession` - Authenticated user and the guilds they administer
//! - `CsrfSession` - CSRF token management for OAuth flows
//! - `FlashSession` - One-shot notices shown on the next page load
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::{
    model::{
        api::{FlashLevel, FlashMessageDto},
        discord::{snowflake, GuildDto},
    },
    server::error::AppError,
};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_FLASH_MESSAGES: &str = "flash:messages";

/// Authenticated identity stored in the session at login.
///
/// The guild list is a snapshot taken at login and is not refreshed afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionUser {
    #[serde(with = "snowflake")]
    pub user_id: u64,
    pub guilds: Vec<GuildDto>,
}

impl SessionUser {
    /// Finds a guild in the session's guild list.
    pub fn guild(&self, guild_id: u64) -> Option<&GuildDto> {
        self.guilds.iter().find(|guild| guild.id == guild_id)
    }
}

/// Authentication session management.
///
/// Handles the logged-in user's identity and guild list and the session lifecycle.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session.
    ///
    /// The session id is cycled first so an id fixed before login can't be reused,
    /// then the user and guild list are written under a single key.
    ///
    /// # Returns
    /// - `Ok(())` - User stored in session
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn login(&self, user: &SessionUser) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the logged-in user from the session.
    ///
    /// # Returns
    /// - `Ok(Some(SessionUser))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        let user = self.session.get::<SessionUser>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Clears all data from the session.
    ///
    /// Used during logout to remove authentication state and any pending flow data.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// Each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// Flash notice queue.
///
/// Notices are appended by handlers that redirect and drained by the next
/// `GET /api/flash`.
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Appends a notice to the queue.
    pub async fn push(&self, level: FlashLevel, message: impl Into<String>) -> Result<(), AppError> {
        let mut messages = self
            .session
            .get::<Vec<FlashMessageDto>>(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();

        messages.push(FlashMessageDto {
            level,
            message: message.into(),
        });

        self.session.insert(SESSION_FLASH_MESSAGES, messages).await?;
        Ok(())
    }

    /// Removes and returns every queued notice, oldest first.
    pub async fn take_all(&self) -> Result<Vec<FlashMessageDto>, AppError> {
        let messages = self
            .session
            .remove::<Vec<FlashMessageDto>>(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();
        Ok(messages)
    }
}
