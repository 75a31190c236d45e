use super::*;

/// Tests an anonymous session.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).identity().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that an identity is available before registration.
///
/// Expected: Ok(Identity) matching what was stored at login
#[tokio::test]
async fn returns_unregistered_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let identity = Identity {
        external_id: "provider|42".to_string(),
        name: "New Student".to_string(),
        email: "new@uni.edu".to_string(),
        picture: Some("https://img/new.png".to_string()),
    };
    AuthSession::new(session).set_identity(&identity).await?;

    let stored = AuthGuard::new(db, session).identity().await?;

    assert_eq!(stored, identity);

    Ok(())
}
