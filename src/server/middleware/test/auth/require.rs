use super::*;

/// Tests a registered user with no permissions required.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_registered_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_identity(&identity_for(&user)).await?;

    let returned = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(returned.id, user.id);

    Ok(())
}

/// Tests an authenticated identity without a user row.
///
/// Expected: Err(AuthError::UserNotInDatabase) which maps to 404
#[tokio::test]
async fn rejects_unregistered_identity() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_identity(&Identity {
            external_id: "provider|missing".to_string(),
            name: "Ghost".to_string(),
            email: "ghost@uni.edu".to_string(),
            picture: None,
        })
        .await?;

    let err = AuthGuard::new(db, session).require(&[]).await.unwrap_err();

    assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::UserNotInDatabase(_))
    ));

    Ok(())
}

/// Tests the club admin permission.
///
/// Expected: AccessDenied for a regular user, Ok for a verified admin
#[tokio::test]
async fn checks_club_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let regular = factory::create_user(db).await?;
    AuthSession::new(session).set_identity(&identity_for(&regular)).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::ClubAdmin])
        .await;
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, _))) => {
            assert_eq!(user_id, regular.id)
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db)
        .club_admin(club.id)
        .build()
        .await?;
    AuthSession::new(session).set_identity(&identity_for(&admin)).await?;

    let returned = AuthGuard::new(db, session)
        .require(&[Permission::ClubAdmin])
        .await?;
    assert_eq!(returned.admin_club_id, Some(club.id));

    Ok(())
}

/// Tests the super admin permission against the configured email list.
///
/// Expected: Ok when the email is listed regardless of case, AccessDenied otherwise
#[tokio::test]
async fn checks_super_admin_email() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("Registrar@Uni.edu")
        .build()
        .await?;
    AuthSession::new(session).set_identity(&identity_for(&user)).await?;
    let guard = AuthGuard::new(db, session);

    let listed = vec!["registrar@uni.edu".to_string()];
    assert!(guard.require(&[Permission::SuperAdmin(&listed)]).await.is_ok());

    let unlisted = vec!["dean@uni.edu".to_string()];
    let err = guard
        .require(&[Permission::SuperAdmin(&unlisted)])
        .await
        .unwrap_err();
    assert_eq!(err.status(), axum::http::StatusCode::FORBIDDEN);

    Ok(())
}
