use super::*;

/// Tests marking a copy complete and then incomplete again.
///
/// Expected: Ok(true) both times, with `completed_at` set then cleared
#[tokio::test]
async fn toggles_completion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, section) = factory::create_enrolled_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .build()
        .await?;
    factory::deadline::create_user_copy(db, user.id, &deadline, &course).await?;

    let repo = UserDeadlineRepository::new(db);

    assert!(repo.set_completed(user.id, &deadline.id, true, Utc::now()).await?);
    let copy = repo.find(user.id, &deadline.id).await?.unwrap();
    assert!(copy.completed);
    assert!(copy.completed_at.is_some());
    assert!(repo.completed_ids(user.id, course.id).await?.contains(&deadline.id));

    assert!(repo.set_completed(user.id, &deadline.id, false, Utc::now()).await?);
    let copy = repo.find(user.id, &deadline.id).await?.unwrap();
    assert!(!copy.completed);
    assert!(copy.completed_at.is_none());

    Ok(())
}

/// Tests completing a deadline the user holds no copy of.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_copy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, section) = factory::create_enrolled_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .build()
        .await?;

    let result = UserDeadlineRepository::new(db)
        .set_completed(user.id, &deadline.id, true, Utc::now())
        .await?;

    assert!(!result);

    Ok(())
}
