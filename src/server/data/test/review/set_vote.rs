use super::*;

/// Tests that voting the same way twice keeps the vote.
///
/// Reviews replace votes instead of toggling them.
///
/// Expected: Ok with one agree vote
#[tokio::test]
async fn repeated_vote_is_kept() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _) = factory::create_course_with_section(db).await?;
    let author = factory::create_user(db).await?;
    let voter = factory::create_user(db).await?;
    let review = factory::create_review(db, course.id, author.id, 5).await?;

    let repo = ReviewRepository::new(db);
    repo.set_vote(review.id, voter.id, true).await?;
    repo.set_vote(review.id, voter.id, true).await?;

    let review = repo.find_by_id(review.id).await?.unwrap();
    assert_eq!(review.votes.positive, 1);
    assert_eq!(review.votes.negative, 0);

    Ok(())
}

/// Tests switching from agree to disagree.
///
/// Expected: Ok with one disagree vote and no agree vote
#[tokio::test]
async fn switches_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _) = factory::create_course_with_section(db).await?;
    let author = factory::create_user(db).await?;
    let voter = factory::create_user(db).await?;
    let review = factory::create_review(db, course.id, author.id, 5).await?;

    let repo = ReviewRepository::new(db);
    repo.set_vote(review.id, voter.id, true).await?;
    repo.set_vote(review.id, voter.id, false).await?;

    let review = repo.find_by_id(review.id).await?.unwrap();
    assert_eq!(review.votes.positive, 0);
    assert_eq!(review.votes.negative, 1);

    Ok(())
}
