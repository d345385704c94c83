//! Moderation history business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::moderation_log::ModerationLogRepository,
    error::AppError,
    model::moderation::{clamp_limit, ModerationLog, RecordModerationParam},
};

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a moderation action and bumps the guild's matching counter.
    pub async fn record(&self, param: RecordModerationParam) -> Result<ModerationLog, AppError> {
        let repo = ModerationLogRepository::new(self.db);

        let (guild_id, action) = (param.guild_id, param.action);
        let entry = repo.create_and_count(param).await?;

        tracing::info!("Recorded {} action in guild {}", action.as_str(), guild_id);

        Ok(entry)
    }

    /// Gets a guild's latest entries; `limit` defaults to 10 and is capped at 100.
    pub async fn get_latest(
        &self,
        guild_id: u64,
        limit: Option<u64>,
    ) -> Result<Vec<ModerationLog>, AppError> {
        let repo = ModerationLogRepository::new(self.db);

        Ok(repo.get_latest_by_guild(guild_id, clamp_limit(limit)).await?)
    }
}
