mod giveaway;
mod guild_config;
mod moderation_log;
mod user;
