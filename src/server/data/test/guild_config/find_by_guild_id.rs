use super::*;

/// Tests reading a configuration that was never created.
///
/// Expected: Ok(None) and no record created
#[tokio::test]
async fn returns_none_without_creating() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);

    assert!(repo.find_by_guild_id(42).await?.is_none());
    assert!(repo.find_by_guild_id(42).await?.is_none());

    Ok(())
}

/// Tests decoding of stored custom commands.
///
/// Expected: the stored mapping is returned as trigger to response pairs
#[tokio::test]
async fn decodes_custom_commands() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .custom_commands(Some("{\"hello\":\"world\"}"))
        .build()
        .await?;

    let config = GuildConfigRepository::new(db)
        .find_by_guild_id(42)
        .await?
        .unwrap();

    assert_eq!(config.custom_commands.len(), 1);
    assert_eq!(config.custom_commands.get("hello").map(String::as_str), Some("world"));
    assert!(config.custom_commands_error.is_none());

    Ok(())
}

/// Tests that missing or empty custom commands read back as an empty mapping.
///
/// Expected: empty mapping and no decoding error for null and empty text
#[tokio::test]
async fn treats_missing_custom_commands_as_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("1")
        .custom_commands(None)
        .build()
        .await?;
    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("2")
        .custom_commands(Some(""))
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    for guild_id in [1, 2] {
        let config = repo.find_by_guild_id(guild_id).await?.unwrap();
        assert!(config.custom_commands.is_empty());
        assert!(config.custom_commands_error.is_none());
    }

    Ok(())
}

/// Tests that unparsable stored custom commands degrade instead of failing.
///
/// Expected: Ok with an empty mapping, a decoding error and the rest of the record intact
#[tokio::test]
async fn degrades_malformed_custom_commands() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("42")
        .prefix("?")
        .custom_commands(Some("{not json"))
        .build()
        .await?;

    let config = GuildConfigRepository::new(db)
        .find_by_guild_id(42)
        .await?
        .unwrap();

    assert!(config.custom_commands.is_empty());
    assert!(config.custom_commands_error.is_some());
    assert_eq!(config.prefix, "?");

    Ok(())
}
