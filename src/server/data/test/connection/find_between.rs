use super::*;

/// Tests that an edge is found regardless of direction.
///
/// Expected: Ok(Some) from both sides with the original sender kept
#[tokio::test]
async fn finds_edge_in_either_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_connection(db, alice.id, bob.id, "pending").await?;

    let repo = ConnectionRepository::new(db);
    let forward = repo.find_between(alice.id, bob.id).await?.unwrap();
    let backward = repo.find_between(bob.id, alice.id).await?.unwrap();

    assert_eq!(forward, backward);
    assert_eq!(forward.sender_id, alice.id);
    assert_eq!(forward.status, ConnectionStatus::Pending);
    assert!(repo.find_edge(bob.id, alice.id).await?.is_none());

    Ok(())
}

/// Tests users without any edge.
///
/// Expected: Ok(None) and not connected
#[tokio::test]
async fn returns_none_without_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = ConnectionRepository::new(db);

    assert!(repo.find_between(alice.id, bob.id).await?.is_none());
    assert!(!repo.is_connected(alice.id, bob.id).await?);

    Ok(())
}
