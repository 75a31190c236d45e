use super::*;

/// Tests dismissing one's own invite.
///
/// Expected: Ok(true) and the invite no longer listed
#[tokio::test]
async fn dismisses_own_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let invite = factory::create_study_invite(db, guest.id, host.id, "room").await?;

    let repo = StudyInviteRepository::new(db);

    assert!(repo.deactivate(invite.id, guest.id).await?);
    assert!(repo.active_for_user(guest.id, 20).await?.is_empty());

    Ok(())
}

/// Tests dismissing somebody else's invite.
///
/// Expected: Ok(false) and the invite still active
#[tokio::test]
async fn ignores_other_users_invite() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let invite = factory::create_study_invite(db, guest.id, host.id, "room").await?;

    let repo = StudyInviteRepository::new(db);

    assert!(!repo.deactivate(invite.id, host.id).await?);
    assert_eq!(repo.active_for_user(guest.id, 20).await?.len(), 1);

    Ok(())
}
