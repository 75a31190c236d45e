use super::*;

/// Tests which of a user's directories other users may list.
///
/// Expected: strangers and pending requesters see nothing, an accepted connection
/// sees only the connections-scoped directory, the owner sees both
#[tokio::test]
async fn requires_accepted_connection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;
    let pending = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    factory::connect(db, owner.id, friend.id).await?;
    factory::create_connection(db, pending.id, owner.id, "pending").await?;

    DirectoryFactory::new(db, "CSE110")
        .owner(owner.id)
        .visibility("private")
        .title("Private notes")
        .build()
        .await?;
    let shared = DirectoryFactory::new(db, "CSE110")
        .owner(owner.id)
        .visibility("connections")
        .title("Shared notes")
        .build()
        .await?;
    let service = DirectoryService::new(db);

    assert!(service.get_visible_owned_by(stranger.id, owner.id).await?.is_empty());
    assert!(service.get_visible_owned_by(pending.id, owner.id).await?.is_empty());

    let seen_by_friend = service.get_visible_owned_by(friend.id, owner.id).await?;
    assert_eq!(seen_by_friend.len(), 1);
    assert_eq!(seen_by_friend[0].directory.id, shared.id);

    assert_eq!(service.get_visible_owned_by(owner.id, owner.id).await?.len(), 2);

    Ok(())
}
