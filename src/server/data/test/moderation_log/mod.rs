use crate::{
    model::moderation::ModerationActionKind,
    server::{
        data::{guild_config::GuildConfigRepository, moderation_log::ModerationLogRepository},
        model::moderation::RecordModerationParam,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_and_count;
mod get_latest_by_guild;

fn record(guild_id: u64, action: ModerationActionKind) -> RecordModerationParam {
    RecordModerationParam {
        guild_id,
        action,
        user_id: 555,
        user_name: Some("Target".to_string()),
        moderator_id: 777,
        moderator_name: Some("Moderator".to_string()),
        reason: Some("spam".to_string()),
        duration: None,
    }
}
