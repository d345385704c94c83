pub use super::giveaway::Entity as Giveaway;
pub use super::guild_config::Entity as GuildConfig;
pub use super::moderation_log::Entity as ModerationLog;
pub use super::user::Entity as User;
