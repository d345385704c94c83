use super::*;

/// Tests the owner passing an owner-only check.
///
/// Expected: Ok with is_owner set
#[tokio::test]
async fn grants_access_to_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("111")
        .owner(true)
        .build()
        .await?;
    AuthSession::new(session)
        .login(&session_user(111, &[]))
        .await?;

    let authenticated = AuthGuard::new(db, session)
        .require(&[Permission::Owner])
        .await?;

    assert!(authenticated.user.is_owner);

    Ok(())
}

/// Tests a regular user requesting an owner-only route.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_owner() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("222")
        .owner(false)
        .build()
        .await?;
    AuthSession::new(session)
        .login(&session_user(222, &[42]))
        .await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Owner])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, 222);
            assert!(message.contains("Owner"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
