use super::*;

mod require_guild;
mod require_owner;

/// Tests access without a logged-in user.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_access_without_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a session pointing at a user that is not stored.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_for_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .login(&session_user(123456789, &[]))
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(user_id))) => {
            assert_eq!(user_id, 123456789)
        }
        other => panic!("Expected UserNotInDatabase error, got: {:?}", other),
    }

    Ok(())
}

/// Tests an empty permission list.
///
/// Expected: Ok with the stored user and the session snapshot
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("123456789")
        .name("Member")
        .build()
        .await?;
    AuthSession::new(session)
        .login(&session_user(123456789, &[42]))
        .await?;

    let authenticated = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(authenticated.user.discord_id, 123456789);
    assert_eq!(authenticated.user.name, "Member");
    assert_eq!(authenticated.session.guilds.len(), 1);

    Ok(())
}
