use super::*;
use test_utils::factory;

/// Tests finding an existing user.
///
/// Expected: Ok(Some) with the stored user
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("555")
        .name("Found")
        .owner(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(555).await?;

    let user = user.expect("user should exist");
    assert_eq!(user.name, "Found");
    assert!(user.is_owner);

    Ok(())
}

/// Tests looking up a user that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_discord_id(999).await?;

    assert!(user.is_none());

    Ok(())
}
