//! Guild configuration domain models and partial-update parsing.
//!
//! A `GuildConfig` is the decoded form of a stored configuration row. Edits arrive as
//! loosely typed JSON objects and are parsed into a `GuildConfigPatch`: a list of typed
//! `ConfigChange`s restricted to the fields in `ConfigField`. Anything outside that
//! allow-list (ids, counters, timestamps, unknown keys) is never written by a patch.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{model::guild_config::GuildConfigDto, server::error::AppError};

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_LANGUAGE: &str = "fr";
pub const DEFAULT_WELCOME_MESSAGE: &str = "Bienvenue {member} sur {server} !";
pub const DEFAULT_WELCOME_DM_MESSAGE: &str = "Bienvenue sur {server} !";
pub const DEFAULT_LEAVE_MESSAGE: &str = "{member} nous a quittés...";
pub const DEFAULT_AUTOMOD_ACTION: &str = "delete";
pub const DEFAULT_CAPS_PERCENTAGE: i32 = 70;
pub const DEFAULT_CAPS_MIN_LENGTH: i32 = 10;
pub const DEFAULT_CUSTOM_COMMANDS: &str = "{}";

/// Decoded guild configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildConfig {
    pub id: i32,
    pub guild_id: String,
    pub guild_name: Option<String>,
    pub guild_icon: Option<String>,

    pub prefix: String,
    pub language: String,

    pub log_channel_id: Option<String>,
    pub mod_log_channel_id: Option<String>,
    pub message_log_channel_id: Option<String>,
    pub voice_log_channel_id: Option<String>,
    pub member_log_channel_id: Option<String>,

    pub welcome_enabled: bool,
    pub welcome_channel_id: Option<String>,
    pub welcome_message: String,
    pub welcome_dm_enabled: bool,
    pub welcome_dm_message: String,

    pub leave_enabled: bool,
    pub leave_channel_id: Option<String>,
    pub leave_message: String,

    pub auto_role_id: Option<String>,
    pub muted_role_id: Option<String>,

    pub auto_mod_enabled: bool,
    pub bad_words_enabled: bool,
    pub bad_words_action: String,
    pub invites_enabled: bool,
    pub invites_action: String,
    pub caps_enabled: bool,
    pub caps_percentage: i32,
    pub caps_min_length: i32,

    pub giveaway_channel_id: Option<String>,

    /// Trigger to response mapping; empty when nothing is stored or decoding failed.
    pub custom_commands: BTreeMap<String, String>,
    /// Why the stored custom commands could not be decoded, if they couldn't.
    pub custom_commands_error: Option<String>,

    pub total_warns: i32,
    pub total_kicks: i32,
    pub total_bans: i32,
    pub total_mutes: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GuildConfig {
    /// Converts an entity model at the repository boundary.
    ///
    /// Stored custom commands that fail to decode are logged and replaced by an empty
    /// mapping; the rest of the record is kept.
    pub fn from_entity(entity: entity::guild_config::Model) -> Self {
        let (custom_commands, custom_commands_error) =
            match decode_custom_commands(entity.custom_commands.as_deref()) {
                Ok(commands) => (commands, None),
                Err(error) => {
                    tracing::warn!(
                        "Stored custom commands for guild {} could not be decoded: {}",
                        entity.guild_id,
                        error
                    );
                    (BTreeMap::new(), Some(error))
                }
            };

        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            guild_name: entity.guild_name,
            guild_icon: entity.guild_icon,
            prefix: entity.prefix,
            language: entity.language,
            log_channel_id: entity.log_channel_id,
            mod_log_channel_id: entity.mod_log_channel_id,
            message_log_channel_id: entity.message_log_channel_id,
            voice_log_channel_id: entity.voice_log_channel_id,
            member_log_channel_id: entity.member_log_channel_id,
            welcome_enabled: entity.welcome_enabled,
            welcome_channel_id: entity.welcome_channel_id,
            welcome_message: entity.welcome_message,
            welcome_dm_enabled: entity.welcome_dm_enabled,
            welcome_dm_message: entity.welcome_dm_message,
            leave_enabled: entity.leave_enabled,
            leave_channel_id: entity.leave_channel_id,
            leave_message: entity.leave_message,
            auto_role_id: entity.auto_role_id,
            muted_role_id: entity.muted_role_id,
            auto_mod_enabled: entity.auto_mod_enabled,
            bad_words_enabled: entity.bad_words_enabled,
            bad_words_action: entity.bad_words_action,
            invites_enabled: entity.invites_enabled,
            invites_action: entity.invites_action,
            caps_enabled: entity.caps_enabled,
            caps_percentage: entity.caps_percentage,
            caps_min_length: entity.caps_min_length,
            giveaway_channel_id: entity.giveaway_channel_id,
            custom_commands,
            custom_commands_error,
            total_warns: entity.total_warns,
            total_kicks: entity.total_kicks,
            total_bans: entity.total_bans,
            total_mutes: entity.total_mutes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts to the external JSON view.
    pub fn into_dto(self) -> GuildConfigDto {
        GuildConfigDto {
            id: self.id,
            guild_id: self.guild_id,
            guild_name: self.guild_name,
            guild_icon: self.guild_icon,
            prefix: self.prefix,
            language: self.language,
            log_channel_id: self.log_channel_id,
            mod_log_channel_id: self.mod_log_channel_id,
            message_log_channel_id: self.message_log_channel_id,
            voice_log_channel_id: self.voice_log_channel_id,
            member_log_channel_id: self.member_log_channel_id,
            welcome_enabled: self.welcome_enabled,
            welcome_channel_id: self.welcome_channel_id,
            welcome_message: self.welcome_message,
            welcome_dm_enabled: self.welcome_dm_enabled,
            welcome_dm_message: self.welcome_dm_message,
            leave_enabled: self.leave_enabled,
            leave_channel_id: self.leave_channel_id,
            leave_message: self.leave_message,
            auto_role_id: self.auto_role_id,
            muted_role_id: self.muted_role_id,
            auto_mod_enabled: self.auto_mod_enabled,
            bad_words_enabled: self.bad_words_enabled,
            bad_words_action: self.bad_words_action,
            invites_enabled: self.invites_enabled,
            invites_action: self.invites_action,
            caps_enabled: self.caps_enabled,
            caps_percentage: self.caps_percentage,
            caps_min_length: self.caps_min_length,
            giveaway_channel_id: self.giveaway_channel_id,
            custom_commands: self.custom_commands,
            custom_commands_error: self.custom_commands_error,
            total_warns: self.total_warns,
            total_kicks: self.total_kicks,
            total_bans: self.total_bans,
            total_mutes: self.total_mutes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Decodes stored custom commands text.
///
/// Absent or blank text is an empty mapping.
///
/// # Returns
/// - `Ok(BTreeMap)` - Trigger to response mapping
/// - `Err(String)` - The text is not a JSON object of strings
pub fn decode_custom_commands(raw: Option<&str>) -> Result<BTreeMap<String, String>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(BTreeMap::new()),
        Some(text) => serde_json::from_str(text).map_err(|e| e.to_string()),
    }
}

/// Parameters for creating a configuration on first access.
///
/// The name and icon seed the new record only; an existing record keeps its own.
#[derive(Debug, Clone, Default)]
pub struct CreateGuildConfigParam {
    pub guild_id: u64,
    pub guild_name: Option<String>,
    pub guild_icon: Option<String>,
}

/// Configuration fields a partial update may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    GuildName,
    GuildIcon,
    Prefix,
    Language,
    LogChannelId,
    ModLogChannelId,
    MessageLogChannelId,
    VoiceLogChannelId,
    MemberLogChannelId,
    WelcomeEnabled,
    WelcomeChannelId,
    WelcomeMessage,
    WelcomeDmEnabled,
    WelcomeDmMessage,
    LeaveEnabled,
    LeaveChannelId,
    LeaveMessage,
    AutoRoleId,
    MutedRoleId,
    AutoModEnabled,
    BadWordsEnabled,
    BadWordsAction,
    InvitesEnabled,
    InvitesAction,
    CapsEnabled,
    CapsPercentage,
    CapsMinLength,
    GiveawayChannelId,
    CustomCommands,
}

/// Shape a field's JSON value must have.
#[derive(Debug, Clone, Copy)]
enum FieldKind {
    /// Required string with a length range in characters.
    Text { min: usize, max: usize },
    LongText,
    /// String or null.
    OptionalText,
    /// Snowflake id; empty string or null clears it.
    Snowflake,
    Flag,
    Integer { min: i64, max: i64 },
    /// Object of string to string, or a string holding one.
    Mapping,
}

impl ConfigField {
    pub const ALL: [ConfigField; 29] = [
        Self::GuildName,
        Self::GuildIcon,
        Self::Prefix,
        Self::Language,
        Self::LogChannelId,
        Self::ModLogChannelId,
        Self::MessageLogChannelId,
        Self::VoiceLogChannelId,
        Self::MemberLogChannelId,
        Self::WelcomeEnabled,
        Self::WelcomeChannelId,
        Self::WelcomeMessage,
        Self::WelcomeDmEnabled,
        Self::WelcomeDmMessage,
        Self::LeaveEnabled,
        Self::LeaveChannelId,
        Self::LeaveMessage,
        Self::AutoRoleId,
        Self::MutedRoleId,
        Self::AutoModEnabled,
        Self::BadWordsEnabled,
        Self::BadWordsAction,
        Self::InvitesEnabled,
        Self::InvitesAction,
        Self::CapsEnabled,
        Self::CapsPercentage,
        Self::CapsMinLength,
        Self::GiveawayChannelId,
        Self::CustomCommands,
    ];

    /// JSON key naming this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::GuildName => "guild_name",
            Self::GuildIcon => "guild_icon",
            Self::Prefix => "prefix",
            Self::Language => "language",
            Self::LogChannelId => "log_channel_id",
            Self::ModLogChannelId => "mod_log_channel_id",
            Self::MessageLogChannelId => "message_log_channel_id",
            Self::VoiceLogChannelId => "voice_log_channel_id",
            Self::MemberLogChannelId => "member_log_channel_id",
            Self::WelcomeEnabled => "welcome_enabled",
            Self::WelcomeChannelId => "welcome_channel_id",
            Self::WelcomeMessage => "welcome_message",
            Self::WelcomeDmEnabled => "welcome_dm_enabled",
            Self::WelcomeDmMessage => "welcome_dm_message",
            Self::LeaveEnabled => "leave_enabled",
            Self::LeaveChannelId => "leave_channel_id",
            Self::LeaveMessage => "leave_message",
            Self::AutoRoleId => "auto_role_id",
            Self::MutedRoleId => "muted_role_id",
            Self::AutoModEnabled => "auto_mod_enabled",
            Self::BadWordsEnabled => "bad_words_enabled",
            Self::BadWordsAction => "bad_words_action",
            Self::InvitesEnabled => "invites_enabled",
            Self::InvitesAction => "invites_action",
            Self::CapsEnabled => "caps_enabled",
            Self::CapsPercentage => "caps_percentage",
            Self::CapsMinLength => "caps_min_length",
            Self::GiveawayChannelId => "giveaway_channel_id",
            Self::CustomCommands => "custom_commands",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.key() == key)
    }

    fn kind(self) -> FieldKind {
        match self {
            Self::GuildName | Self::GuildIcon => FieldKind::OptionalText,
            Self::Prefix | Self::Language => FieldKind::Text { min: 1, max: 10 },
            Self::BadWordsAction | Self::InvitesAction => FieldKind::Text { min: 1, max: 20 },
            Self::WelcomeMessage | Self::WelcomeDmMessage | Self::LeaveMessage => {
                FieldKind::LongText
            }
            Self::LogChannelId
            | Self::ModLogChannelId
            | Self::MessageLogChannelId
            | Self::VoiceLogChannelId
            | Self::MemberLogChannelId
            | Self::WelcomeChannelId
            | Self::LeaveChannelId
            | Self::AutoRoleId
            | Self::MutedRoleId
            | Self::GiveawayChannelId => FieldKind::Snowflake,
            Self::WelcomeEnabled
            | Self::WelcomeDmEnabled
            | Self::LeaveEnabled
            | Self::AutoModEnabled
            | Self::BadWordsEnabled
            | Self::InvitesEnabled
            | Self::CapsEnabled => FieldKind::Flag,
            Self::CapsPercentage => FieldKind::Integer { min: 0, max: 100 },
            Self::CapsMinLength => FieldKind::Integer {
                min: 0,
                max: i32::MAX as i64,
            },
            Self::CustomCommands => FieldKind::Mapping,
        }
    }
}

/// Typed value ready to be written to a column.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Text(String),
    OptionalText(Option<String>),
    Flag(bool),
    Integer(i32),
}

/// One validated field assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigChange {
    pub field: ConfigField,
    pub value: ConfigValue,
}

impl ConfigChange {
    /// Validates a JSON value against the field's accepted shape.
    ///
    /// # Returns
    /// - `Ok(ConfigChange)` - Value converted to its column type
    /// - `Err(String)` - Description of the expected shape
    pub fn parse(field: ConfigField, value: &Value) -> Result<Self, String> {
        let value = match field.kind() {
            FieldKind::Text { min, max } => {
                let text = value
                    .as_str()
                    .filter(|s| (min..=max).contains(&s.chars().count()))
                    .ok_or_else(|| format!("expected a string of {} to {} characters", min, max))?;
                ConfigValue::Text(text.to_string())
            }
            FieldKind::LongText => {
                let text = value.as_str().ok_or("expected a string")?;
                ConfigValue::Text(text.to_string())
            }
            FieldKind::OptionalText => match value {
                Value::Null => ConfigValue::OptionalText(None),
                Value::String(s) => ConfigValue::OptionalText(Some(s.clone())),
                _ => return Err("expected a string or null".to_string()),
            },
            FieldKind::Snowflake => ConfigValue::OptionalText(parse_snowflake(value)?),
            FieldKind::Flag => ConfigValue::Flag(value.as_bool().ok_or("expected a boolean")?),
            FieldKind::Integer { min, max } => {
                let number = value
                    .as_i64()
                    .filter(|n| (min..=max).contains(n))
                    .ok_or_else(|| format!("expected an integer from {} to {}", min, max))?;
                ConfigValue::Integer(number as i32)
            }
            FieldKind::Mapping => {
                let commands = parse_custom_commands(value)?;
                let text = serde_json::to_string(&commands).map_err(|e| e.to_string())?;
                ConfigValue::Text(text)
            }
        };

        Ok(Self { field, value })
    }
}

/// Reads a snowflake id given as a decimal string or an integer.
///
/// Returns the canonical decimal form, or `None` for an empty string or null.
fn parse_snowflake(value: &Value) -> Result<Option<String>, String> {
    const EXPECTED: &str = "expected a snowflake id as a string or integer, or null";

    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map(|id| Some(id.to_string()))
            .map_err(|_| EXPECTED.to_string()),
        Value::Number(n) => n
            .as_u64()
            .map(|id| Some(id.to_string()))
            .ok_or_else(|| EXPECTED.to_string()),
        _ => Err(EXPECTED.to_string()),
    }
}

fn parse_custom_commands(value: &Value) -> Result<BTreeMap<String, String>, String> {
    const EXPECTED: &str = "expected an object mapping triggers to responses";

    match value {
        Value::Object(_) => serde_json::from_value(value.clone()).map_err(|_| EXPECTED.to_string()),
        Value::String(text) => decode_custom_commands(Some(text)).map_err(|_| EXPECTED.to_string()),
        _ => Err(EXPECTED.to_string()),
    }
}

/// Validated partial update of a guild configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuildConfigPatch {
    pub changes: Vec<ConfigChange>,
}

impl GuildConfigPatch {
    /// Parses a JSON object into a patch.
    ///
    /// Keys outside the allow-list are skipped. The first recognized key with a value
    /// of the wrong shape rejects the whole patch.
    ///
    /// # Returns
    /// - `Ok(GuildConfigPatch)` - Every recognized key validated
    /// - `Err(AppError::BadRequest)` - Body is not an object or a value has the wrong shape
    pub fn from_json(body: &Value) -> Result<Self, AppError> {
        let Some(object) = body.as_object() else {
            return Err(AppError::BadRequest(
                "Request body must be a JSON object".to_string(),
            ));
        };

        let mut changes = Vec::new();
        for (key, value) in object {
            let Some(field) = ConfigField::from_key(key) else {
                tracing::debug!("Ignoring unknown configuration key '{}'", key);
                continue;
            };

            let change = ConfigChange::parse(field, value)
                .map_err(|reason| AppError::BadRequest(format!("Invalid value for '{}': {}", key, reason)))?;
            changes.push(change);
        }

        Ok(Self { changes })
    }
}
