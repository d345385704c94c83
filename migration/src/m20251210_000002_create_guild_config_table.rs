use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildConfig::Id))
                    .col(string_uniq(GuildConfig::GuildId))
                    .col(string_null(GuildConfig::GuildName))
                    .col(string_null(GuildConfig::GuildIcon))
                    // General
                    .col(string(GuildConfig::Prefix).default("!"))
                    .col(string(GuildConfig::Language).default("fr"))
                    // Logging
                    .col(string_null(GuildConfig::LogChannelId))
                    .col(string_null(GuildConfig::ModLogChannelId))
                    .col(string_null(GuildConfig::MessageLogChannelId))
                    .col(string_null(GuildConfig::VoiceLogChannelId))
                    .col(string_null(GuildConfig::MemberLogChannelId))
                    // Welcome & leave
                    .col(boolean(GuildConfig::WelcomeEnabled).default(true))
                    .col(string_null(GuildConfig::WelcomeChannelId))
                    .col(text(GuildConfig::WelcomeMessage))
                    .col(boolean(GuildConfig::WelcomeDmEnabled).default(false))
                    .col(text(GuildConfig::WelcomeDmMessage))
                    .col(boolean(GuildConfig::LeaveEnabled).default(true))
                    .col(string_null(GuildConfig::LeaveChannelId))
                    .col(text(GuildConfig::LeaveMessage))
                    // Roles
                    .col(string_null(GuildConfig::AutoRoleId))
                    .col(string_null(GuildConfig::MutedRoleId))
                    // Automod
                    .col(boolean(GuildConfig::AutoModEnabled).default(true))
                    .col(boolean(GuildConfig::BadWordsEnabled).default(true))
                    .col(string(GuildConfig::BadWordsAction).default("delete"))
                    .col(boolean(GuildConfig::InvitesEnabled).default(true))
                    .col(string(GuildConfig::InvitesAction).default("delete"))
                    .col(boolean(GuildConfig::CapsEnabled).default(true))
                    .col(integer(GuildConfig::CapsPercentage).default(70))
                    .col(integer(GuildConfig::CapsMinLength).default(10))
                    .col(string_null(GuildConfig::GiveawayChannelId))
                    .col(text_null(GuildConfig::CustomCommands))
                    // Moderation totals
                    .col(integer(GuildConfig::TotalWarns).default(0))
                    .col(integer(GuildConfig::TotalKicks).default(0))
                    .col(integer(GuildConfig::TotalBans).default(0))
                    .col(integer(GuildConfig::TotalMutes).default(0))
                    .col(
                        timestamp(GuildConfig::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(GuildConfig::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildConfig {
    Table,
    Id,
    GuildId,
    GuildName,
    GuildIcon,
    Prefix,
    Language,
    LogChannelId,
    ModLogChannelId,
    MessageLogChannelId,
    VoiceLogChannelId,
    MemberLogChannelId,
    WelcomeEnabled,
    WelcomeChannelId,
    WelcomeMessage,
    WelcomeDmEnabled,
    WelcomeDmMessage,
    LeaveEnabled,
    LeaveChannelId,
    LeaveMessage,
    AutoRoleId,
    MutedRoleId,
    AutoModEnabled,
    BadWordsEnabled,
    BadWordsAction,
    InvitesEnabled,
    InvitesAction,
    CapsEnabled,
    CapsPercentage,
    CapsMinLength,
    GiveawayChannelId,
    CustomCommands,
    TotalWarns,
    TotalKicks,
    TotalBans,
    TotalMutes,
    CreatedAt,
    UpdatedAt,
}
