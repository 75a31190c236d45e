use super::*;

/// Tests that switching from up to down leaves a single down vote.
///
/// Expected: positive 0, negative 1, viewer Some(false)
#[tokio::test]
async fn votes_are_exclusive() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::create_user(db).await?;
    let resource = ResourceFactory::new(db, "CSE220").build().await?;
    let service = ResourceService::new(db);

    service.vote(voter.id, resource.id, ResourceVoteAction::Up).await?;
    let tally = service
        .vote(voter.id, resource.id, ResourceVoteAction::Down)
        .await?;

    assert_eq!(tally.positive, 0);
    assert_eq!(tally.negative, 1);
    assert_eq!(tally.viewer, Some(false));

    Ok(())
}

/// Tests that clearing removes the voter's vote.
///
/// Expected: empty tally
#[tokio::test]
async fn clear_removes_vote() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::create_user(db).await?;
    let resource = ResourceFactory::new(db, "CSE220").build().await?;
    let service = ResourceService::new(db);

    service.vote(voter.id, resource.id, ResourceVoteAction::Up).await?;
    let tally = service
        .vote(voter.id, resource.id, ResourceVoteAction::Clear)
        .await?;

    assert_eq!(tally.positive, 0);
    assert_eq!(tally.viewer, None);

    Ok(())
}

/// Tests that voting on a resource the voter cannot see fails.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_invisible_resource() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let voter = factory::create_user(db).await?;
    let resource = ResourceFactory::new(db, "CSE220")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;

    let result = ResourceService::new(db)
        .vote(voter.id, resource.id, ResourceVoteAction::Up)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
