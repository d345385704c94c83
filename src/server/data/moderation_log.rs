//! Moderation log repository.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::{
    model::moderation::ModerationActionKind,
    server::{
        data::guild_config::get_or_create_entity,
        model::{
            guild_config::CreateGuildConfigParam,
            moderation::{ModerationLog, RecordModerationParam},
        },
    },
};

use entity::guild_config::Column as ConfigColumn;

pub struct ModerationLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a moderation log entry and increments the guild's matching counter.
    ///
    /// Both writes happen in one transaction. The guild configuration is created with
    /// defaults if it does not exist yet.
    ///
    /// # Returns
    /// - `Ok(ModerationLog)` - The stored entry
    /// - `Err(DbErr)` - Database error; nothing is written
    pub async fn create_and_count(
        &self,
        param: RecordModerationParam,
    ) -> Result<ModerationLog, DbErr> {
        let txn = self.db.begin().await?;

        get_or_create_entity(
            &txn,
            CreateGuildConfigParam {
                guild_id: param.guild_id,
                ..Default::default()
            },
        )
        .await?;

        let entity = entity::moderation_log::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            action: ActiveValue::Set(param.action.as_str().to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            user_name: ActiveValue::Set(param.user_name),
            moderator_id: ActiveValue::Set(param.moderator_id.to_string()),
            moderator_name: ActiveValue::Set(param.moderator_name),
            reason: ActiveValue::Set(param.reason),
            duration: ActiveValue::Set(param.duration),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let counter = counter_column(param.action);
        entity::prelude::GuildConfig::update_many()
            .col_expr(counter, Expr::col(counter).add(1))
            .col_expr(ConfigColumn::UpdatedAt, Expr::value(Utc::now()))
            .filter(ConfigColumn::GuildId.eq(param.guild_id.to_string()))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(ModerationLog::from_entity(entity))
    }

    /// Gets the most recent entries of a guild, newest first.
    pub async fn get_latest_by_guild(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<ModerationLog>, DbErr> {
        let entities = entity::prelude::ModerationLog::find()
            .filter(entity::moderation_log::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::moderation_log::Column::CreatedAt)
            .order_by_desc(entity::moderation_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ModerationLog::from_entity).collect())
    }
}

fn counter_column(action: ModerationActionKind) -> ConfigColumn {
    match action {
        ModerationActionKind::Warn => ConfigColumn::TotalWarns,
        ModerationActionKind::Kick => ConfigColumn::TotalKicks,
        ModerationActionKind::Ban => ConfigColumn::TotalBans,
        ModerationActionKind::Mute => ConfigColumn::TotalMutes,
    }
}
