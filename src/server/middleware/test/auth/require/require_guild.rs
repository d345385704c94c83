use super::*;

/// Tests access to a guild captured in the session at login.
///
/// Expected: Ok
#[tokio::test]
async fn grants_access_to_session_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_id(db, "333").await?;
    AuthSession::new(session)
        .login(&session_user(333, &[41, 42]))
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Guild(42)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests access to a guild missing from the session.
///
/// Ownership does not grant access to guilds outside the session list.
///
/// Expected: Err(AuthError::GuildAccessDenied)
#[tokio::test]
async fn denies_access_to_other_guild() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("444")
        .owner(true)
        .build()
        .await?;
    AuthSession::new(session)
        .login(&session_user(444, &[41]))
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Guild(42)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::GuildAccessDenied { user_id, guild_id })) => {
            assert_eq!(user_id, 444);
            assert_eq!(guild_id, 42);
        }
        other => panic!("Expected GuildAccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that every permission in the list must hold.
///
/// Expected: Err(AuthError::AccessDenied) when the guild is present but the owner check fails
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::create_user_with_id(db, "555").await?;
    AuthSession::new(session)
        .login(&session_user(555, &[42]))
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Guild(42), Permission::Owner])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(555, _)))
    ));

    Ok(())
}
