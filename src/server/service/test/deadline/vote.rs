use super::*;

/// Tests that repeating a vote removes it and switching replaces it.
///
/// Expected: agree, then cleared, then disagree
#[tokio::test]
async fn same_vote_twice_clears() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, section) = factory::create_enrolled_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .build()
        .await?;
    let service = DeadlineService::new(db);

    let first = service.vote(user.id, &deadline.id, VoteChoice::Agree).await?;
    assert_eq!(first.votes.positive, 1);
    assert_eq!(first.votes.viewer, Some(true));

    let second = service.vote(user.id, &deadline.id, VoteChoice::Agree).await?;
    assert_eq!(second.votes.positive, 0);
    assert_eq!(second.votes.viewer, None);

    let third = service.vote(user.id, &deadline.id, VoteChoice::Disagree).await?;
    assert_eq!(third.votes.negative, 1);
    assert_eq!(third.votes.viewer, Some(false));

    Ok(())
}
