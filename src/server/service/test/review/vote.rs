use super::*;

/// Tests that a new vote replaces the voter's earlier one.
///
/// Expected: one disagree vote remains and the viewer sees Some(false)
#[tokio::test]
async fn vote_replaces_previous() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let voter = factory::create_user(db).await?;
    let course = factory::create_course(db).await?;
    let review = factory::create_review(db, course.id, author.id, 3).await?;
    let service = ReviewService::new(db);

    service.vote(voter.id, review.id, VoteChoice::Agree).await?;
    service.vote(voter.id, review.id, VoteChoice::Agree).await?;
    service.vote(voter.id, review.id, VoteChoice::Disagree).await?;

    let reviews = service.get_for_course(course.id, Some(voter.id)).await?;
    assert_eq!(reviews[0].votes.positive, 0);
    assert_eq!(reviews[0].votes.negative, 1);
    assert_eq!(reviews[0].votes.viewer, Some(false));

    Ok(())
}

/// Tests that voting on a missing review fails.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let voter = factory::create_user(db).await?;
    let result = ReviewService::new(db).vote(voter.id, 99, VoteChoice::Agree).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
