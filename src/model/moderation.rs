use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::discord::snowflake;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModerationActionKind {
    Warn,
    Kick,
    Ban,
    Mute,
}

impl ModerationActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Mute => "mute",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModerationLogDto {
    pub id: i32,
    pub guild_id: String,
    pub action: String,
    pub user_id: String,
    pub user_name: Option<String>,
    pub moderator_id: String,
    pub moderator_name: Option<String>,
    pub reason: Option<String>,
    pub duration: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body of a moderation action reported by the bot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateModerationLogDto {
    pub action: ModerationActionKind,
    #[serde(with = "snowflake")]
    pub user_id: u64,
    pub user_name: Option<String>,
    #[serde(with = "snowflake")]
    pub moderator_id: u64,
    pub moderator_name: Option<String>,
    pub reason: Option<String>,
    pub duration: Option<String>,
}
