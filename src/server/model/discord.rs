//! Discord REST API payloads used during login.
//!
//! Only the fields the dashboard needs are decoded. Ids arrive as decimal strings and
//! the guild permission bitmask arrives as a string in API v10, or as an integer in
//! older versions; both are accepted.

use serde::{Deserialize, Deserializer};
use serenity::all::Permissions;

use crate::model::discord::{snowflake, GuildDto};

const DISCORD_CDN_URL: &str = "https://cdn.discordapp.com";

/// Number of default avatars Discord cycles through.
const DEFAULT_AVATAR_COUNT: u64 = 5;

/// Response of `GET /users/@me`.
#[derive(Deserialize, Debug, Clone)]
pub struct DiscordUser {
    #[serde(with = "snowflake")]
    pub id: u64,
    pub username: String,
    pub avatar: Option<String>,
    pub discriminator: Option<String>,
}

impl DiscordUser {
    /// CDN URL for the user's avatar.
    ///
    /// Falls back to one of the default avatars, picked by discriminator. A missing or
    /// unparsable discriminator counts as 0.
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("{}/avatars/{}/{}.png", DISCORD_CDN_URL, self.id, hash),
            None => {
                let discriminator = self
                    .discriminator
                    .as_deref()
                    .and_then(|d| d.parse::<u64>().ok())
                    .unwrap_or(0);

                format!(
                    "{}/embed/avatars/{}.png",
                    DISCORD_CDN_URL,
                    discriminator % DEFAULT_AVATAR_COUNT
                )
            }
        }
    }
}

/// One entry of `GET /users/@me/guilds`.
#[derive(Deserialize, Debug, Clone)]
pub struct DiscordGuild {
    #[serde(with = "snowflake")]
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    #[serde(deserialize_with = "deserialize_permissions")]
    pub permissions: Permissions,
    pub approximate_member_count: Option<u64>,
}

impl DiscordGuild {
    /// Whether the user holds the ADMINISTRATOR permission in this guild.
    pub fn is_admin(&self) -> bool {
        self.permissions.contains(Permissions::ADMINISTRATOR)
    }

    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_deref().map(|icon| guild_icon_url(self.id, icon))
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            icon_url: self.icon_url(),
            id: self.id,
            name: self.name,
            icon: self.icon,
            approximate_member_count: self.approximate_member_count,
        }
    }
}

/// CDN URL for a guild icon hash.
pub fn guild_icon_url(guild_id: u64, icon: &str) -> String {
    format!("{}/icons/{}/{}.png", DISCORD_CDN_URL, guild_id, icon)
}

fn deserialize_permissions<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Permissions, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(u64),
    }

    let bits = match StringOrInt::deserialize(deserializer)? {
        StringOrInt::Int(bits) => bits,
        StringOrInt::String(s) => s
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid permissions '{}'", s)))?,
    };

    Ok(Permissions::from_bits_truncate(bits))
}
