use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Giveaway::Table)
                    .if_not_exists()
                    .col(pk_auto(Giveaway::Id))
                    .col(string_uniq(Giveaway::MessageId))
                    .col(string(Giveaway::GuildId))
                    .col(string(Giveaway::ChannelId))
                    .col(string(Giveaway::Prize))
                    .col(integer(Giveaway::Winners).default(1))
                    .col(integer(Giveaway::Entrants).default(0))
                    .col(string(Giveaway::HostId))
                    .col(string_null(Giveaway::HostName))
                    .col(timestamp_null(Giveaway::EndTime))
                    .col(boolean(Giveaway::Ended).default(false))
                    .col(string_null(Giveaway::RequiredRoleId))
                    .col(
                        timestamp(Giveaway::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_giveaway_guild_id")
                    .table(Giveaway::Table)
                    .col(Giveaway::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Giveaway::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Giveaway {
    Table,
    Id,
    MessageId,
    GuildId,
    ChannelId,
    Prize,
    Winners,
    Entrants,
    HostId,
    HostName,
    EndTime,
    Ended,
    RequiredRoleId,
    CreatedAt,
}
