//! Moderation log factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating moderation log entries.
pub struct ModerationLogFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    action: String,
    user_id: String,
    moderator_id: String,
    reason: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ModerationLogFactory<'a> {
    /// Creates a new factory for a `warn` entry in the given guild.
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            action: "warn".to_string(),
            user_id: next_id().to_string(),
            moderator_id: next_id().to_string(),
            reason: Some("Test reason".to_string()),
            created_at: Utc::now(),
        }
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = action.into();
        self
    }

    pub fn reason(mut self, reason: Option<&str>) -> Self {
        self.reason = reason.map(str::to_string);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::moderation_log::Model, DbErr> {
        entity::moderation_log::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            action: ActiveValue::Set(self.action),
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(Some("Target".to_string())),
            moderator_id: ActiveValue::Set(self.moderator_id),
            moderator_name: ActiveValue::Set(Some("Moderator".to_string())),
            reason: ActiveValue::Set(self.reason),
            duration: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `warn` moderation log entry for the given guild.
pub async fn create_moderation_log(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::moderation_log::Model, DbErr> {
    ModerationLogFactory::new(db, guild_id).build().await
}
