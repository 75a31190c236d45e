use super::*;

/// Tests optional resolution for anonymous, unregistered and registered visitors.
///
/// Expected: None, None, then Some(User)
#[tokio::test]
async fn resolves_optional_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let guard = AuthGuard::new(db, session);

    assert!(guard.optional().await?.is_none());

    AuthSession::new(session)
        .set_identity(&Identity {
            external_id: "provider|unregistered".to_string(),
            name: "Visitor".to_string(),
            email: "visitor@uni.edu".to_string(),
            picture: None,
        })
        .await?;
    assert!(guard.optional().await?.is_none());

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_identity(&identity_for(&user)).await?;
    let resolved = guard.optional().await?;
    assert_eq!(resolved.map(|u| u.id), Some(user.id));

    Ok(())
}
