use super::*;

/// Tests updating a handful of fields.
///
/// Verifies that supplied fields are written and everything else is left alone.
///
/// Expected: Ok(Some) with prefix and caps_percentage changed
#[tokio::test]
async fn updates_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let before = repo.get_or_create(param(42)).await?;

    let after = repo
        .apply_partial_update(42, patch(json!({"prefix": "?", "caps_percentage": 85})))
        .await?
        .unwrap();

    assert_eq!(after.prefix, "?");
    assert_eq!(after.caps_percentage, 85);
    assert_eq!(after.language, before.language);
    assert_eq!(after.caps_min_length, before.caps_min_length);
    assert!(after.updated_at >= before.updated_at);

    Ok(())
}

/// Tests a patch made only of unknown keys.
///
/// Expected: Ok(Some) with the record unchanged apart from updated_at
#[tokio::test]
async fn ignores_unknown_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let before = repo.get_or_create(param(42)).await?;

    let mut after = repo
        .apply_partial_update(42, patch(json!({"foo": "bar", "total_bans": 5})))
        .await?
        .unwrap();

    assert!(after.updated_at >= before.updated_at);
    after.updated_at = before.updated_at;
    assert_eq!(after, before);

    Ok(())
}

/// Tests clearing and setting snowflake ids.
///
/// Expected: Ok(Some) with the channel set from an integer and the role cleared
#[tokio::test]
async fn sets_and_clears_snowflake_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.get_or_create(param(42)).await?;
    repo.apply_partial_update(42, patch(json!({"auto_role_id": "111"})))
        .await?;

    let after = repo
        .apply_partial_update(
            42,
            patch(json!({"welcome_channel_id": 222, "auto_role_id": ""})),
        )
        .await?
        .unwrap();

    assert_eq!(after.welcome_channel_id.as_deref(), Some("222"));
    assert_eq!(after.auto_role_id, None);

    Ok(())
}

/// Tests that custom commands round-trip through a patch.
///
/// Expected: Ok(Some) with the mapping decoded back
#[tokio::test]
async fn round_trips_custom_commands() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.get_or_create(param(42)).await?;

    let after = repo
        .apply_partial_update(42, patch(json!({"custom_commands": {"hello": "world"}})))
        .await?
        .unwrap();

    assert_eq!(after.custom_commands.get("hello").map(String::as_str), Some("world"));

    let stored = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(stored.custom_commands, after.custom_commands);

    Ok(())
}

/// Tests updating a guild without a configuration.
///
/// Expected: Ok(None) and nothing created
#[tokio::test]
async fn returns_none_for_missing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo
        .apply_partial_update(42, patch(json!({"prefix": "?"})))
        .await?;

    assert!(result.is_none());
    assert!(repo.find_by_guild_id(42).await?.is_none());

    Ok(())
}

/// Tests concurrent patches touching different fields.
///
/// Expected: both changes persist
#[tokio::test]
async fn keeps_concurrent_disjoint_updates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    repo.get_or_create(param(42)).await?;

    let (a, b) = tokio::join!(
        repo.apply_partial_update(42, patch(json!({"prefix": "?"}))),
        repo.apply_partial_update(42, patch(json!({"language": "en"}))),
    );
    a?;
    b?;

    let config = repo.find_by_guild_id(42).await?.unwrap();
    assert_eq!(config.prefix, "?");
    assert_eq!(config.language, "en");

    Ok(())
}

/// Tests that patches never touch the moderation counters.
///
/// Expected: total_bans unchanged after a patch naming it
#[tokio::test]
async fn leaves_counters_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .total_bans(3)
        .build()
        .await?;

    let after = GuildConfigRepository::new(db)
        .apply_partial_update(42, patch(json!({"total_bans": 0, "prefix": "$"})))
        .await?
        .unwrap();

    assert_eq!(after.total_bans, 3);
    assert_eq!(after.prefix, "$");

    Ok(())
}
