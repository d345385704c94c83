//! Guild configuration factory.
//!
//! Rows are created with the same defaults a freshly created configuration carries
//! in the application, so tests can compare against them directly.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating guild configuration rows.
pub struct GuildConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    guild_name: Option<String>,
    prefix: String,
    welcome_channel_id: Option<String>,
    custom_commands: Option<String>,
    total_bans: i32,
}

impl<'a> GuildConfigFactory<'a> {
    /// Creates a new GuildConfigFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric id
    /// - guild_name: `"Guild {id}"`
    /// - prefix: `"!"`
    /// - custom_commands: `"{}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            guild_name: Some(format!("Guild {}", id)),
            prefix: "!".to_string(),
            welcome_channel_id: None,
            custom_commands: Some("{}".to_string()),
            total_bans: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn guild_name(mut self, guild_name: Option<&str>) -> Self {
        self.guild_name = guild_name.map(str::to_string);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn welcome_channel_id(mut self, channel_id: Option<&str>) -> Self {
        self.welcome_channel_id = channel_id.map(str::to_string);
        self
    }

    /// Sets the raw stored custom commands text, which need not be valid JSON.
    pub fn custom_commands(mut self, custom_commands: Option<&str>) -> Self {
        self.custom_commands = custom_commands.map(str::to_string);
        self
    }

    pub fn total_bans(mut self, total_bans: i32) -> Self {
        self.total_bans = total_bans;
        self
    }

    /// Builds and inserts the guild configuration into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_config::Model)` - Created configuration
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_config::Model, DbErr> {
        let now = Utc::now();
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            guild_name: ActiveValue::Set(self.guild_name),
            guild_icon: ActiveValue::Set(None),
            prefix: ActiveValue::Set(self.prefix),
            language: ActiveValue::Set("fr".to_string()),
            log_channel_id: ActiveValue::Set(None),
            mod_log_channel_id: ActiveValue::Set(None),
            message_log_channel_id: ActiveValue::Set(None),
            voice_log_channel_id: ActiveValue::Set(None),
            member_log_channel_id: ActiveValue::Set(None),
            welcome_enabled: ActiveValue::Set(true),
            welcome_channel_id: ActiveValue::Set(self.welcome_channel_id),
            welcome_message: ActiveValue::Set("Bienvenue {member} sur {server} !".to_string()),
            welcome_dm_enabled: ActiveValue::Set(false),
            welcome_dm_message: ActiveValue::Set("Bienvenue sur {server} !".to_string()),
            leave_enabled: ActiveValue::Set(true),
            leave_channel_id: ActiveValue::Set(None),
            leave_message: ActiveValue::Set("{member} nous a quittés...".to_string()),
            auto_role_id: ActiveValue::Set(None),
            muted_role_id: ActiveValue::Set(None),
            auto_mod_enabled: ActiveValue::Set(true),
            bad_words_enabled: ActiveValue::Set(true),
            bad_words_action: ActiveValue::Set("delete".to_string()),
            invites_enabled: ActiveValue::Set(true),
            invites_action: ActiveValue::Set("delete".to_string()),
            caps_enabled: ActiveValue::Set(true),
            caps_percentage: ActiveValue::Set(70),
            caps_min_length: ActiveValue::Set(10),
            giveaway_channel_id: ActiveValue::Set(None),
            custom_commands: ActiveValue::Set(self.custom_commands),
            total_warns: ActiveValue::Set(0),
            total_kicks: ActiveValue::Set(0),
            total_bans: ActiveValue::Set(self.total_bans),
            total_mutes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild configuration with default values.
pub async fn create_guild_config(
    db: &DatabaseConnection,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).build().await
}

/// Creates a guild configuration for a specific guild ID.
pub async fn create_guild_config_with_id(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::guild_config::Model, DbErr> {
    GuildConfigFactory::new(db).guild_id(guild_id).build().await
}
