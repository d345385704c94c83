use super::*;

/// Tests ordering and limiting of the history.
///
/// Expected: the newest entries first, at most `limit` of them
#[tokio::test]
async fn returns_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for (hours_ago, reason) in [(3, "oldest"), (1, "newest"), (2, "middle")] {
        factory::moderation_log::ModerationLogFactory::new(db, "42")
            .reason(Some(reason))
            .created_at(now - Duration::hours(hours_ago))
            .build()
            .await?;
    }

    let entries = ModerationLogRepository::new(db)
        .get_latest_by_guild(42, 2)
        .await?;

    let reasons: Vec<_> = entries.iter().map(|e| e.reason.as_deref()).collect();
    assert_eq!(reasons, vec![Some("newest"), Some("middle")]);

    Ok(())
}

/// Tests that entries from other guilds are excluded.
///
/// Expected: only the requested guild's entries
#[tokio::test]
async fn filters_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::moderation_log::create_moderation_log(db, "42").await?;
    factory::moderation_log::create_moderation_log(db, "43").await?;
    factory::moderation_log::ModerationLogFactory::new(db, "42")
        .action("ban")
        .build()
        .await?;

    let entries = ModerationLogRepository::new(db)
        .get_latest_by_guild(42, 10)
        .await?;

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.guild_id == "42"));

    Ok(())
}

/// Tests a guild without history.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_quiet_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ModerationLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entries = ModerationLogRepository::new(db)
        .get_latest_by_guild(42, 10)
        .await?;

    assert!(entries.is_empty());

    Ok(())
}
