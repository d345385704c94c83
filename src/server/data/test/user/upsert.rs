use super::*;
use sea_orm::EntityTrait;

/// Tests creating a new user on first login.
///
/// Verifies that the user repository creates a user record with the Discord ID,
/// name, avatar and owner flag from the login.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "TestUser".to_string(),
            avatar_url: Some("https://cdn.discordapp.com/embed/avatars/0.png".to_string()),
            is_owner: false,
        })
        .await?;

    assert_eq!(user.discord_id, 123456789);
    assert_eq!(user.name, "TestUser");
    assert!(!user.is_owner);
    assert_eq!(user.created_at, user.last_login_at);

    Ok(())
}

/// Tests that a later login refreshes the stored profile.
///
/// Verifies that name, avatar and owner flag are overwritten while the creation
/// timestamp is preserved.
///
/// Expected: Ok with updated profile and original created_at
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let original = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "OriginalName".to_string(),
            avatar_url: None,
            is_owner: true,
        })
        .await?;

    let updated = repo
        .upsert(UpsertUserParam {
            discord_id: 123456789,
            name: "UpdatedName".to_string(),
            avatar_url: Some("https://cdn.discordapp.com/avatars/123456789/abc.png".to_string()),
            is_owner: false,
        })
        .await?;

    assert_eq!(updated.name, "UpdatedName");
    assert_eq!(
        updated.avatar_url.as_deref(),
        Some("https://cdn.discordapp.com/avatars/123456789/abc.png")
    );
    assert!(!updated.is_owner);
    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.last_login_at >= original.last_login_at);

    let count = entity::prelude::User::find().all(db).await?.len();
    assert_eq!(count, 1);

    Ok(())
}
