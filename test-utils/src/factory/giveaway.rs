//! Giveaway factory.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating giveaway rows.
pub struct GiveawayFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    message_id: String,
    prize: String,
    ended: bool,
}

impl<'a> GiveawayFactory<'a> {
    /// Creates a new factory for an active giveaway in the given guild.
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            message_id: id.to_string(),
            prize: format!("Prize {}", id),
            ended: false,
        }
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    pub fn prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = prize.into();
        self
    }

    pub fn ended(mut self, ended: bool) -> Self {
        self.ended = ended;
        self
    }

    pub async fn build(self) -> Result<entity::giveaway::Model, DbErr> {
        let now = Utc::now();
        entity::giveaway::ActiveModel {
            message_id: ActiveValue::Set(self.message_id),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(next_id().to_string()),
            prize: ActiveValue::Set(self.prize),
            winners: ActiveValue::Set(1),
            entrants: ActiveValue::Set(0),
            host_id: ActiveValue::Set(next_id().to_string()),
            host_name: ActiveValue::Set(Some("Host".to_string())),
            end_time: ActiveValue::Set(Some(now + Duration::days(1))),
            ended: ActiveValue::Set(self.ended),
            required_role_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active giveaway for the given guild.
pub async fn create_giveaway(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::giveaway::Model, DbErr> {
    GiveawayFactory::new(db, guild_id).build().await
}
