use super::*;

/// Tests recording a ban for a guild with an existing configuration.
///
/// Verifies the entry is stored and only the ban counter moves.
///
/// Expected: Ok with total_bans incremented by one
#[tokio::test]
async fn increments_matching_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .total_bans(2)
        .build()
        .await?;

    let entry = ModerationLogRepository::new(db)
        .create_and_count(record(42, ModerationActionKind::Ban))
        .await?;

    assert_eq!(entry.guild_id, "42");
    assert_eq!(entry.action, "ban");
    assert_eq!(entry.user_id, "555");
    assert_eq!(entry.moderator_id, "777");
    assert_eq!(entry.reason.as_deref(), Some("spam"));

    let config = GuildConfigRepository::new(db)
        .find_by_guild_id(42)
        .await?
        .unwrap();
    assert_eq!(config.total_bans, 3);
    assert_eq!(config.total_warns, 0);
    assert_eq!(config.total_kicks, 0);
    assert_eq!(config.total_mutes, 0);

    Ok(())
}

/// Tests recording an action for a guild that has no configuration yet.
///
/// Expected: Ok with a default configuration created and its counter at one
#[tokio::test]
async fn creates_missing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ModerationLogRepository::new(db);
    repo.create_and_count(record(9, ModerationActionKind::Warn))
        .await?;
    repo.create_and_count(record(9, ModerationActionKind::Warn))
        .await?;
    repo.create_and_count(record(9, ModerationActionKind::Mute))
        .await?;

    let config = GuildConfigRepository::new(db)
        .find_by_guild_id(9)
        .await?
        .unwrap();
    assert_eq!(config.prefix, "!");
    assert_eq!(config.total_warns, 2);
    assert_eq!(config.total_mutes, 1);

    Ok(())
}

/// Tests that a failed write leaves neither the entry nor the counter behind.
///
/// The moderation log table is missing so the insert fails after the configuration
/// was created inside the transaction.
///
/// Expected: Err and no configuration persisted
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ModerationLogRepository::new(db)
        .create_and_count(record(42, ModerationActionKind::Kick))
        .await;

    assert!(result.is_err());
    assert!(GuildConfigRepository::new(db)
        .find_by_guild_id(42)
        .await?
        .is_none());

    Ok(())
}
