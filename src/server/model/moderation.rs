//! Moderation log domain models.

use chrono::{DateTime, Utc};

use crate::model::moderation::{CreateModerationLogDto, ModerationActionKind, ModerationLogDto};

/// Default number of entries returned by moderation history queries.
pub const DEFAULT_MODERATION_LIMIT: u64 = 10;
/// Upper bound on entries returned by one moderation history query.
pub const MAX_MODERATION_LIMIT: u64 = 100;

/// Clamps a requested history length to the allowed range.
pub fn clamp_limit(limit: Option<u64>) -> u64 {
    limit
        .unwrap_or(DEFAULT_MODERATION_LIMIT)
        .clamp(1, MAX_MODERATION_LIMIT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModerationLog {
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

impl ModerationLog {
    pub fn from_entity(entity: entity::moderation_log::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            action: entity.action,
            user_id: entity.user_id,
            user_name: entity.user_name,
            moderator_id: entity.moderator_id,
            moderator_name: entity.moderator_name,
            reason: entity.reason,
            duration: entity.duration,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ModerationLogDto {
        ModerationLogDto {
            id: self.id,
            guild_id: self.guild_id,
            action: self.action,
            user_id: self.user_id,
            user_name: self.user_name,
            moderator_id: self.moderator_id,
            moderator_name: self.moderator_name,
            reason: self.reason,
            duration: self.duration,
            created_at: self.created_at,
        }
    }
}

/// Parameters for recording one moderation action.
#[derive(Debug, Clone)]
pub struct RecordModerationParam {
    pub guild_id: u64,
    pub action: ModerationActionKind,
    pub user_id: u64,
    pub user_name: Option<String>,
    pub moderator_id: u64,
    pub moderator_name: Option<String>,
    pub reason: Option<String>,
    pub duration: Option<String>,
}

impl RecordModerationParam {
    pub fn from_dto(guild_id: u64, dto: CreateModerationLogDto) -> Self {
        Self {
            guild_id,
            action: dto.action,
            user_id: dto.user_id,
            user_name: dto.user_name,
            moderator_id: dto.moderator_id,
            moderator_name: dto.moderator_name,
            reason: dto.reason,
            duration: dto.duration,
        }
    }
}
