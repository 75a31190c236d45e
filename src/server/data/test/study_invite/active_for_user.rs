use super::*;

/// Tests listing a user's invites newest first, with the limit applied.
///
/// Expected: Ok with the two newest invites
#[tokio::test]
async fn lists_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;

    let repo = StudyInviteRepository::new(db);
    let now = Utc::now();
    repo.create_many(host.id, "room-a", &[guest.id], now - Duration::minutes(10))
        .await?;
    repo.create_many(host.id, "room-b", &[guest.id], now - Duration::minutes(5))
        .await?;
    repo.create_many(host.id, "room-c", &[guest.id], now).await?;

    let invites = repo.active_for_user(guest.id, 2).await?;

    let slugs: Vec<&str> = invites.iter().map(|i| i.room_slug.as_str()).collect();
    assert_eq!(slugs, vec!["room-c", "room-b"]);

    Ok(())
}
