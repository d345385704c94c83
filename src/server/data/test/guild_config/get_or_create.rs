use super::*;

/// Tests creating a configuration on first access.
///
/// Verifies that every field carries its documented default and that the seed name
/// and icon are stored.
///
/// Expected: Ok with defaults and seed values
#[tokio::test]
async fn creates_config_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo
        .get_or_create(CreateGuildConfigParam {
            guild_id: 42,
            guild_name: Some("Test Guild".to_string()),
            guild_icon: Some("https://cdn.discordapp.com/icons/42/abc.png".to_string()),
        })
        .await?;

    assert_eq!(config.guild_id, "42");
    assert_eq!(config.guild_name.as_deref(), Some("Test Guild"));
    assert_eq!(
        config.guild_icon.as_deref(),
        Some("https://cdn.discordapp.com/icons/42/abc.png")
    );
    assert_eq!(config.prefix, "!");
    assert_eq!(config.language, "fr");
    assert!(config.log_channel_id.is_none());
    assert!(config.welcome_enabled);
    assert_eq!(config.welcome_message, "Bienvenue {member} sur {server} !");
    assert!(!config.welcome_dm_enabled);
    assert_eq!(config.welcome_dm_message, "Bienvenue sur {server} !");
    assert!(config.leave_enabled);
    assert_eq!(config.leave_message, "{member} nous a quittés...");
    assert!(config.auto_mod_enabled);
    assert!(config.bad_words_enabled);
    assert_eq!(config.bad_words_action, "delete");
    assert!(config.invites_enabled);
    assert_eq!(config.invites_action, "delete");
    assert!(config.caps_enabled);
    assert_eq!(config.caps_percentage, 70);
    assert_eq!(config.caps_min_length, 10);
    assert!(config.custom_commands.is_empty());
    assert!(config.custom_commands_error.is_none());
    assert_eq!(config.total_warns, 0);
    assert_eq!(config.total_bans, 0);

    Ok(())
}

/// Tests that a second call returns the existing record.
///
/// Verifies idempotency and that a different seed does not overwrite stored values.
///
/// Expected: Ok with the same id and the original name
#[tokio::test]
async fn returns_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let first = repo
        .get_or_create(CreateGuildConfigParam {
            guild_id: 42,
            guild_name: Some("Original".to_string()),
            guild_icon: None,
        })
        .await?;
    let second = repo
        .get_or_create(CreateGuildConfigParam {
            guild_id: 42,
            guild_name: Some("Renamed".to_string()),
            guild_icon: None,
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.guild_name.as_deref(), Some("Original"));
    assert_eq!(first, second);

    Ok(())
}

/// Tests concurrent first accesses for the same guild.
///
/// Expected: Ok for both with a single shared record
#[tokio::test]
async fn converges_on_concurrent_creation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let (a, b) = tokio::join!(repo.get_or_create(param(7)), repo.get_or_create(param(7)));

    assert_eq!(a?.id, b?.id);

    Ok(())
}
