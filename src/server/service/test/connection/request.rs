use super::*;

/// Tests that a second request while one is open reports the pending state.
///
/// Expected: Sent, then AlreadyPending
#[tokio::test]
async fn repeat_request_is_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = User::from_entity(factory::create_user(db).await?);
    let target = factory::create_user(db).await?;
    let service = ConnectionService::new(db);

    assert_eq!(service.request(&sender, target.id).await?, RequestOutcome::Sent);
    assert_eq!(
        service.request(&sender, target.id).await?,
        RequestOutcome::AlreadyPending
    );

    Ok(())
}

/// Tests that users cannot request themselves.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_self_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let result = ConnectionService::new(db).request(&user, user.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a request after a rejection opens a fresh pending request.
///
/// Expected: Sent, and the receiver sees it as incoming
#[tokio::test]
async fn reopens_rejected_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = factory::create_user(db).await?;
    let receiver = factory::create_user(db).await?;
    factory::create_connection(db, receiver.id, sender.id, "rejected").await?;
    let service = ConnectionService::new(db);

    let outcome = service
        .request(&User::from_entity(sender.clone()), receiver.id)
        .await?;
    let incoming = service.get_incoming_requests(receiver.id).await?;

    assert_eq!(outcome, RequestOutcome::Sent);
    assert_eq!(incoming.len(), 1);
    assert_eq!(incoming[0].id, sender.id);

    Ok(())
}

/// Tests that cancelling without an open request is a conflict.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn cancel_without_request_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let sender = User::from_entity(factory::create_user(db).await?);
    let target = factory::create_user(db).await?;
    let result = ConnectionService::new(db).cancel(&sender, target.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
