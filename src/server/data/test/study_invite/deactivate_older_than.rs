use super::*;

/// Tests expiring invites older than the cutoff.
///
/// Expected: Ok(1) with only the recent invite still active
#[tokio::test]
async fn expires_only_old_invites() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;

    let repo = StudyInviteRepository::new(db);
    let now = Utc::now();
    repo.create_many(host.id, "old", &[guest.id], now - Duration::hours(30))
        .await?;
    repo.create_many(host.id, "fresh", &[guest.id], now - Duration::hours(1))
        .await?;

    let expired = repo.deactivate_older_than(now - Duration::hours(24)).await?;

    assert_eq!(expired, 1);
    let invites = repo.active_for_user(guest.id, 20).await?;
    assert_eq!(invites.len(), 1);
    assert_eq!(invites[0].room_slug, "fresh");

    Ok(())
}
