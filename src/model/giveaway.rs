use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::discord::snowflake;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GiveawayDto {
    pub id: i32,
    pub message_id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub prize: String,
    pub winners: i32,
    pub entrants: i32,
    pub host_id: String,
    pub host_name: Option<String>,
    pub end_time: Option<DateTime<Utc>>,
    pub ended: bool,
    pub required_role_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

fn default_winners() -> i32 {
    1
}

/// Body of a giveaway registration sent by the bot.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateGiveawayDto {
    #[serde(with = "snowflake")]
    pub message_id: u64,
    #[serde(with = "snowflake")]
    pub channel_id: u64,
    pub prize: String,
    #[serde(default = "default_winners")]
    pub winners: i32,
    #[serde(with = "snowflake")]
    pub host_id: u64,
    pub host_name: Option<String>,
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, with = "snowflake::option")]
    pub required_role_id: Option<u64>,
}

/// Mutable giveaway fields; absent fields are left as they are.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateGiveawayDto {
    pub entrants: Option<i32>,
    pub ended: Option<bool>,
}
