use super::*;

/// Tests counting giveaways that have not ended.
///
/// Expected: ended giveaways and other guilds are not counted
#[tokio::test]
async fn counts_only_active_in_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::giveaway::create_giveaway(db, "1").await?;
    factory::giveaway::create_giveaway(db, "2").await?;
    factory::giveaway::GiveawayFactory::new(db, "2")
        .ended(true)
        .build()
        .await?;
    factory::giveaway::create_giveaway(db, "3").await?;

    let count = GiveawayRepository::new(db)
        .count_active_for_guilds(&[1, 2])
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting with no guilds.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_no_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Giveaway)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::giveaway::create_giveaway(db, "1").await?;

    let count = GiveawayRepository::new(db)
        .count_active_for_guilds(&[])
        .await?;

    assert_eq!(count, 0);

    Ok(())
}
