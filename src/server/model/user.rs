//! User domain models and parameters.
//!
//! Provides the domain model for dashboard users with their Discord identity and owner
//! flag, plus the parameter type used to record a login.

use chrono::{DateTime, Utc};

use crate::{
    model::user::UserDto,
    server::{error::AppError, util::parse::parse_stored_snowflake},
};

/// Dashboard user with Discord identity and owner flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord ID of the user
    pub discord_id: u64,
    /// Discord username.
    pub name: String,
    /// CDN URL of the user's avatar.
    pub avatar_url: Option<String>,
    /// Whether the user is the configured bot owner.
    pub is_owner: bool,
    pub last_login_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            discord_id: self.discord_id,
            name: self.name,
            avatar_url: self.avatar_url,
            is_owner: self.is_owner,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidSnowflake))` - Stored Discord ID is not a u64
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let discord_id = parse_stored_snowflake("user.discord_id", &entity.discord_id)?;

        Ok(Self {
            discord_id,
            name: entity.name,
            avatar_url: entity.avatar_url,
            is_owner: entity.is_owner,
            last_login_at: entity.last_login_at,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for recording a successful login.
///
/// Creates the user on first login and refreshes every field on later ones.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Discord ID of the user
    pub discord_id: u64,
    pub name: String,
    pub avatar_url: Option<String>,
    pub is_owner: bool,
}
