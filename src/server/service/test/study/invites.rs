use super::*;

/// Tests that dismissing hides the invite and only works for its recipient.
///
/// Expected: NotFound for another user, then an empty invite list
#[tokio::test]
async fn dismiss_own_invite() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let invite = factory::create_study_invite(db, guest.id, host.id, "algebra").await?;
    let service = StudyService::new(db, ROOM_PREFIX);

    let invites = service.get_invites(guest.id).await?;
    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0].host_name, host.name);

    let foreign = service.dismiss(host.id, invite.id).await;
    assert!(matches!(foreign, Err(AppError::NotFound(_))));

    service.dismiss(guest.id, invite.id).await?;
    assert!(service.get_invites(guest.id).await?.is_empty());

    Ok(())
}

/// Tests that the hourly sweep deactivates invites older than a day.
///
/// Expected: one invite expired and none left active
#[tokio::test]
async fn expires_stale_invites() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    factory::create_study_invite(db, guest.id, host.id, "stale").await?;
    let service = StudyService::new(db, ROOM_PREFIX);

    let expired = service.expire_stale(Utc::now() + Duration::hours(25)).await?;
    assert_eq!(expired, 1);
    assert!(service.get_invites(guest.id).await?.is_empty());

    Ok(())
}
