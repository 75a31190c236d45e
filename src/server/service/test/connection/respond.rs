use super::*;

/// Tests that accepting makes the connection visible to both users.
///
/// Expected: Accepted, then AlreadyConnected, and both lists hold the other user
#[tokio::test]
async fn accept_connects_both_sides() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let receiver = User::from_entity(factory::create_user(db).await?);
    factory::create_connection(db, sender.id, receiver.id, "pending").await?;
    let service = ConnectionService::new(db);

    assert_eq!(service.accept(&receiver, sender.id).await?, AcceptOutcome::Accepted);
    assert_eq!(
        service.accept(&receiver, sender.id).await?,
        AcceptOutcome::AlreadyConnected
    );

    let theirs = service.get_connections(sender.id).await?;
    let mine = service.get_connections(receiver.id).await?;
    assert_eq!(theirs.iter().map(|u| u.id).collect::<Vec<_>>(), vec![receiver.id]);
    assert_eq!(mine.iter().map(|u| u.id).collect::<Vec<_>>(), vec![sender.id]);

    Ok(())
}

/// Tests that only the receiver can act on a pending request.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn sender_cannot_accept_own_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let receiver = factory::create_user(db).await?;
    factory::create_connection(db, sender.id, receiver.id, "pending").await?;

    let result = ConnectionService::new(db)
        .accept(&User::from_entity(sender), receiver.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that disconnecting works from the receiving side.
///
/// Expected: Ok, then Err(AppError::BadRequest) on repeat
#[tokio::test]
async fn disconnect_from_either_side() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let receiver = User::from_entity(factory::create_user(db).await?);
    factory::connect(db, sender.id, receiver.id).await?;
    let service = ConnectionService::new(db);

    service.disconnect(&receiver, sender.id).await?;
    let repeat = service.disconnect(&receiver, sender.id).await;

    assert!(service.get_connections(sender.id).await?.is_empty());
    assert!(matches!(repeat, Err(AppError::BadRequest(_))));

    Ok(())
}
