use super::*;

/// Tests switching a vote from agree to disagree.
///
/// Expected: Ok with a single disagree vote recorded
#[tokio::test]
async fn switches_existing_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, section) = factory::create_enrolled_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .build()
        .await?;

    let repo = DeadlineRepository::new(db);
    repo.set_vote(&deadline.id, user.id, true).await?;
    repo.set_vote(&deadline.id, user.id, false).await?;

    assert_eq!(repo.find_vote(&deadline.id, user.id).await?, Some(false));
    let votes = repo.get_votes(&[deadline.id.clone()]).await?;
    assert_eq!(votes.get(&deadline.id), Some(&vec![(user.id, false)]));

    Ok(())
}

/// Tests clearing a vote.
///
/// Expected: Ok with no vote left
#[tokio::test]
async fn clears_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, section) = factory::create_enrolled_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .build()
        .await?;

    let repo = DeadlineRepository::new(db);
    repo.set_vote(&deadline.id, user.id, true).await?;
    repo.clear_vote(&deadline.id, user.id).await?;

    assert_eq!(repo.find_vote(&deadline.id, user.id).await?, None);

    Ok(())
}
