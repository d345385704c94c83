use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete external view of a guild's configuration.
///
/// Custom commands are decoded into a trigger to response mapping. When the stored
/// text can't be decoded the mapping is empty and `custom_commands_error` explains why.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GuildConfigDto {
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

    pub custom_commands: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_commands_error: Option<String>,

    pub total_warns: i32,
    pub total_kicks: i32,
    pub total_bans: i32,
    pub total_mutes: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
