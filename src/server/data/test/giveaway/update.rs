use super::*;

/// Tests updating the entrant count and ended flag.
///
/// Expected: Ok(Some) with both fields changed
#[tokio::test]
async fn updates_entrants_and_ended() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::giveaway::GiveawayFactory::new(db, "42")
        .message_id("1000")
        .build()
        .await?;

    let updated = GiveawayRepository::new(db)
        .update(UpdateGiveawayParam {
            guild_id: 42,
            message_id: 1000,
            entrants: Some(17),
            ended: Some(true),
        })
        .await?
        .unwrap();

    assert_eq!(updated.entrants, 17);
    assert!(updated.ended);

    Ok(())
}

/// Tests that omitted fields keep their values.
///
/// Expected: Ok(Some) with entrants changed and ended untouched
#[tokio::test]
async fn leaves_omitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::giveaway::GiveawayFactory::new(db, "42")
        .message_id("1000")
        .ended(true)
        .build()
        .await?;

    let updated = GiveawayRepository::new(db)
        .update(UpdateGiveawayParam {
            guild_id: 42,
            message_id: 1000,
            entrants: Some(3),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.entrants, 3);
    assert!(updated.ended);

    Ok(())
}

/// Tests updating a giveaway through the wrong guild.
///
/// Expected: Ok(None) and the giveaway unchanged
#[tokio::test]
async fn returns_none_for_other_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::giveaway::GiveawayFactory::new(db, "42")
        .message_id("1000")
        .build()
        .await?;

    let repo = GiveawayRepository::new(db);
    let result = repo
        .update(UpdateGiveawayParam {
            guild_id: 43,
            message_id: 1000,
            ended: Some(true),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());
    assert!(!repo.find_by_message_id(1000).await?.unwrap().ended);

    Ok(())
}

/// Tests updating a giveaway that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GiveawayRepository::new(db)
        .update(UpdateGiveawayParam {
            guild_id: 42,
            message_id: 1000,
            entrants: Some(1),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
