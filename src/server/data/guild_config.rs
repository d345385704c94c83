//! Guild configuration repository.
//!
//! Configurations are created lazily and idempotently: creation inserts with
//! `ON CONFLICT DO NOTHING` and then reads the row back, so concurrent first accesses
//! converge on a single record. Partial updates are issued as one `UPDATE` that only
//! touches the columns named in the patch plus `updated_at`.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::guild_config::{
    ConfigField, ConfigValue, CreateGuildConfigParam, GuildConfig, GuildConfigPatch,
    DEFAULT_AUTOMOD_ACTION, DEFAULT_CAPS_MIN_LENGTH, DEFAULT_CAPS_PERCENTAGE,
    DEFAULT_CUSTOM_COMMANDS, DEFAULT_LANGUAGE, DEFAULT_LEAVE_MESSAGE, DEFAULT_PREFIX,
    DEFAULT_WELCOME_DM_MESSAGE, DEFAULT_WELCOME_MESSAGE,
};

use entity::guild_config::{ActiveModel, Column};

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the configuration of a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Configuration exists
    /// - `Ok(None)` - No configuration has been created for the guild
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildConfig>, DbErr> {
        let entity = find_entity(self.db, guild_id).await?;

        Ok(entity.map(GuildConfig::from_entity))
    }

    /// Returns the guild's configuration, creating it with defaults if absent.
    ///
    /// The seed name and icon only apply when the record is created.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Existing or newly created configuration
    /// - `Err(DbErr)` - Database error during insert or query
    pub async fn get_or_create(&self, param: CreateGuildConfigParam) -> Result<GuildConfig, DbErr> {
        let entity = get_or_create_entity(self.db, param).await?;

        Ok(GuildConfig::from_entity(entity))
    }

    /// Applies a validated patch to an existing configuration.
    ///
    /// Only columns named in the patch and `updated_at` are written, so concurrent
    /// patches touching different fields both persist.
    ///
    /// # Returns
    /// - `Ok(Some(GuildConfig))` - Updated configuration
    /// - `Ok(None)` - No configuration exists for the guild
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_partial_update(
        &self,
        guild_id: u64,
        patch: GuildConfigPatch,
    ) -> Result<Option<GuildConfig>, DbErr> {
        let mut active = ActiveModel {
            ..Default::default()
        };

        for change in patch.changes {
            active.set(column_for(change.field), value_for(change.value));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let result = entity::prelude::GuildConfig::update_many()
            .set(active)
            .filter(Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_guild_id(guild_id).await
    }
}

/// Finds the configuration row of a guild on any connection or transaction.
pub(super) async fn find_entity<C: ConnectionTrait>(
    db: &C,
    guild_id: u64,
) -> Result<Option<entity::guild_config::Model>, DbErr> {
    entity::prelude::GuildConfig::find()
        .filter(Column::GuildId.eq(guild_id.to_string()))
        .one(db)
        .await
}

/// Inserts a default configuration unless one exists, then reads it back.
pub(super) async fn get_or_create_entity<C: ConnectionTrait>(
    db: &C,
    param: CreateGuildConfigParam,
) -> Result<entity::guild_config::Model, DbErr> {
    let guild_id = param.guild_id;

    entity::prelude::GuildConfig::insert(default_config(param))
        .on_conflict(OnConflict::column(Column::GuildId).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;

    find_entity(db, guild_id)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("guild_config for guild {}", guild_id)))
}

fn default_config(param: CreateGuildConfigParam) -> ActiveModel {
    let now = Utc::now();

    ActiveModel {
        guild_id: ActiveValue::Set(param.guild_id.to_string()),
        guild_name: ActiveValue::Set(param.guild_name),
        guild_icon: ActiveValue::Set(param.guild_icon),
        prefix: ActiveValue::Set(DEFAULT_PREFIX.to_string()),
        language: ActiveValue::Set(DEFAULT_LANGUAGE.to_string()),
        log_channel_id: ActiveValue::Set(None),
        mod_log_channel_id: ActiveValue::Set(None),
        message_log_channel_id: ActiveValue::Set(None),
        voice_log_channel_id: ActiveValue::Set(None),
        member_log_channel_id: ActiveValue::Set(None),
        welcome_enabled: ActiveValue::Set(true),
        welcome_channel_id: ActiveValue::Set(None),
        welcome_message: ActiveValue::Set(DEFAULT_WELCOME_MESSAGE.to_string()),
        welcome_dm_enabled: ActiveValue::Set(false),
        welcome_dm_message: ActiveValue::Set(DEFAULT_WELCOME_DM_MESSAGE.to_string()),
        leave_enabled: ActiveValue::Set(true),
        leave_channel_id: ActiveValue::Set(None),
        leave_message: ActiveValue::Set(DEFAULT_LEAVE_MESSAGE.to_string()),
        auto_role_id: ActiveValue::Set(None),
        muted_role_id: ActiveValue::Set(None),
        auto_mod_enabled: ActiveValue::Set(true),
        bad_words_enabled: ActiveValue::Set(true),
        bad_words_action: ActiveValue::Set(DEFAULT_AUTOMOD_ACTION.to_string()),
        invites_enabled: ActiveValue::Set(true),
        invites_action: ActiveValue::Set(DEFAULT_AUTOMOD_ACTION.to_string()),
        caps_enabled: ActiveValue::Set(true),
        caps_percentage: ActiveValue::Set(DEFAULT_CAPS_PERCENTAGE),
        caps_min_length: ActiveValue::Set(DEFAULT_CAPS_MIN_LENGTH),
        giveaway_channel_id: ActiveValue::Set(None),
        custom_commands: ActiveValue::Set(Some(DEFAULT_CUSTOM_COMMANDS.to_string())),
        total_warns: ActiveValue::Set(0),
        total_kicks: ActiveValue::Set(0),
        total_bans: ActiveValue::Set(0),
        total_mutes: ActiveValue::Set(0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

fn column_for(field: ConfigField) -> Column {
    match field {
        ConfigField::GuildName => Column::GuildName,
        ConfigField::GuildIcon => Column::GuildIcon,
        ConfigField::Prefix => Column::Prefix,
        ConfigField::Language => Column::Language,
        ConfigField::LogChannelId => Column::LogChannelId,
        ConfigField::ModLogChannelId => Column::ModLogChannelId,
        ConfigField::MessageLogChannelId => Column::MessageLogChannelId,
        ConfigField::VoiceLogChannelId => Column::VoiceLogChannelId,
        ConfigField::MemberLogChannelId => Column::MemberLogChannelId,
        ConfigField::WelcomeEnabled => Column::WelcomeEnabled,
        ConfigField::WelcomeChannelId => Column::WelcomeChannelId,
        ConfigField::WelcomeMessage => Column::WelcomeMessage,
        ConfigField::WelcomeDmEnabled => Column::WelcomeDmEnabled,
        ConfigField::WelcomeDmMessage => Column::WelcomeDmMessage,
        ConfigField::LeaveEnabled => Column::LeaveEnabled,
        ConfigField::LeaveChannelId => Column::LeaveChannelId,
        ConfigField::LeaveMessage => Column::LeaveMessage,
        ConfigField::AutoRoleId => Column::AutoRoleId,
        ConfigField::MutedRoleId => Column::MutedRoleId,
        ConfigField::AutoModEnabled => Column::AutoModEnabled,
        ConfigField::BadWordsEnabled => Column::BadWordsEnabled,
        ConfigField::BadWordsAction => Column::BadWordsAction,
        ConfigField::InvitesEnabled => Column::InvitesEnabled,
        ConfigField::InvitesAction => Column::InvitesAction,
        ConfigField::CapsEnabled => Column::CapsEnabled,
        ConfigField::CapsPercentage => Column::CapsPercentage,
        ConfigField::CapsMinLength => Column::CapsMinLength,
        ConfigField::GiveawayChannelId => Column::GiveawayChannelId,
        ConfigField::CustomCommands => Column::CustomCommands,
    }
}

fn value_for(value: ConfigValue) -> sea_orm::Value {
    match value {
        ConfigValue::Text(text) => text.into(),
        ConfigValue::OptionalText(text) => text.into(),
        ConfigValue::Flag(flag) => flag.into(),
        ConfigValue::Integer(number) => number.into(),
    }
}
