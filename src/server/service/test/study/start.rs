use super::*;

/// Tests that a session without an invitee list invites every accepted connection.
///
/// Expected: two invites, none for the pending requester
#[tokio::test]
async fn defaults_to_accepted_connections() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let friend_a = factory::create_user(db).await?;
    let friend_b = factory::create_user(db).await?;
    let pending = factory::create_user(db).await?;
    factory::connect(db, host.id, friend_a.id).await?;
    factory::connect(db, friend_b.id, host.id).await?;
    factory::create_connection(db, pending.id, host.id, "pending").await?;
    let service = StudyService::new(db, ROOM_PREFIX);

    let session = service
        .start(
            &User::from_entity(host),
            StartStudySessionParam {
                room_slug: Some("  graph-theory ".to_string()),
                invitees: None,
            },
        )
        .await?;

    assert_eq!(session.invited_count, 2);
    assert_eq!(session.room_slug, "graph-theory");
    assert!(session.meet_url.starts_with("https://meet.jit.si/campus-test-graph-theory"));
    assert_eq!(service.get_invites(friend_a.id).await?.len(), 1);
    assert!(service.get_invites(pending.id).await?.is_empty());

    Ok(())
}

/// Tests that an explicit list drops the host and repeated ids.
///
/// Expected: one invite
#[tokio::test]
async fn dedupes_explicit_invitees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;

    let session = StudyService::new(db, ROOM_PREFIX)
        .start(
            &User::from_entity(host.clone()),
            StartStudySessionParam {
                room_slug: None,
                invitees: Some(vec![guest.id, host.id, guest.id]),
            },
        )
        .await?;

    assert_eq!(session.invited_count, 1);
    assert!(!session.room_slug.is_empty());

    Ok(())
}

/// Tests that ids of missing users are skipped instead of failing the whole session.
///
/// Expected: the existing guest is invited and counted, the unknown id is ignored
#[tokio::test]
async fn skips_unknown_invitees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let service = StudyService::new(db, ROOM_PREFIX);

    let session = service
        .start(
            &User::from_entity(host),
            StartStudySessionParam {
                room_slug: None,
                invitees: Some(vec![guest.id, 99_999]),
            },
        )
        .await?;

    assert_eq!(session.invited_count, 1);
    assert_eq!(service.get_invites(guest.id).await?.len(), 1);

    Ok(())
}
