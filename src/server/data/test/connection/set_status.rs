use super::*;

/// Tests accepting a pending request.
///
/// Expected: Ok(true) and the pair reported as connected
#[tokio::test]
async fn accepts_pending_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = ConnectionRepository::new(db);
    repo.create_request(alice.id, bob.id, Utc::now()).await?;
    assert_eq!(repo.pending_senders_to(bob.id).await?, vec![alice.id]);

    let updated = repo
        .set_status(alice.id, bob.id, ConnectionStatus::Accepted, Utc::now())
        .await?;

    assert!(updated);
    assert!(repo.is_connected(bob.id, alice.id).await?);
    assert!(repo.pending_senders_to(bob.id).await?.is_empty());

    Ok(())
}

/// Tests updating an edge that does not exist in that direction.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_wrong_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::create_connection(db, alice.id, bob.id, "pending").await?;

    let updated = ConnectionRepository::new(db)
        .set_status(bob.id, alice.id, ConnectionStatus::Accepted, Utc::now())
        .await?;

    assert!(!updated);

    Ok(())
}
