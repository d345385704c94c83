//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for recording logins and looking up
//! dashboard users, converting between entity models and domain models at the
//! infrastructure boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a login, creating the user or refreshing their stored profile.
    ///
    /// Name, avatar, owner flag and `last_login_at` are overwritten on conflict;
    /// `created_at` keeps its original value.
    ///
    /// # Arguments
    /// - `param` - Discord identity of the user and their owner flag
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError::DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            name: ActiveValue::Set(param.name),
            avatar_url: ActiveValue::Set(param.avatar_url),
            is_owner: ActiveValue::Set(param.is_owner),
            last_login_at: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns([
                    entity::user::Column::Name,
                    entity::user::Column::AvatarUrl,
                    entity::user::Column::IsOwner,
                    entity::user::Column::LastLoginAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that Discord ID
    /// - `Err(AppError)` - Database error or unparsable stored id
    pub async fn find_by_discord_id(&self, user_id: u64) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }
}
