use super::*;

/// Tests registering a new giveaway.
///
/// Expected: Ok(Some) with zero entrants and not ended
#[tokio::test]
async fn creates_giveaway() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = GiveawayRepository::new(db)
        .create(giveaway(42, 1000))
        .await?
        .unwrap();

    assert_eq!(created.message_id, "1000");
    assert_eq!(created.guild_id, "42");
    assert_eq!(created.channel_id, "300");
    assert_eq!(created.prize, "Nitro");
    assert_eq!(created.winners, 2);
    assert_eq!(created.entrants, 0);
    assert!(!created.ended);
    assert_eq!(created.required_role_id.as_deref(), Some("500"));

    Ok(())
}

/// Tests registering the same message twice.
///
/// Expected: Ok(None) and the original row untouched
#[tokio::test]
async fn rejects_duplicate_message_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GiveawayRepository::new(db);
    repo.create(giveaway(42, 1000)).await?;

    let mut again = giveaway(42, 1000);
    again.prize = "Other".to_string();
    let result = repo.create(again).await?;

    assert!(result.is_none());
    let stored = repo.find_by_message_id(1000).await?.unwrap();
    assert_eq!(stored.prize, "Nitro");

    Ok(())
}

/// Tests that listing returns only the guild's giveaways.
///
/// Expected: two giveaways for guild 42
#[tokio::test]
async fn lists_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::giveaway::create_giveaway(db, "42").await?;
    factory::giveaway::create_giveaway(db, "42").await?;
    factory::giveaway::create_giveaway(db, "43").await?;

    let giveaways = GiveawayRepository::new(db).get_by_guild(42).await?;

    assert_eq!(giveaways.len(), 2);
    assert!(giveaways.iter().all(|g| g.guild_id == "42"));

    Ok(())
}
