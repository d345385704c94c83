use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModerationLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ModerationLog::Id))
                    .col(string(ModerationLog::GuildId))
                    .col(string(ModerationLog::Action))
                    .col(string(ModerationLog::UserId))
                    .col(string_null(ModerationLog::UserName))
                    .col(string(ModerationLog::ModeratorId))
                    .col(string_null(ModerationLog::ModeratorName))
                    .col(text_null(ModerationLog::Reason))
                    .col(string_null(ModerationLog::Duration))
                    .col(
                        timestamp(ModerationLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_moderation_log_guild_id")
                    .table(ModerationLog::Table)
                    .col(ModerationLog::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ModerationLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModerationLog {
    Table,
    Id,
    GuildId,
    Action,
    UserId,
    UserName,
    ModeratorId,
    ModeratorName,
    Reason,
    Duration,
    CreatedAt,
}
