use super::*;

/// Tests propagating an edit to every copy.
///
/// Expected: Ok(2) with both copies renamed and completion left intact
#[tokio::test]
async fn updates_every_copy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let classmate = factory::create_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, creator.id)
        .build()
        .await?;
    factory::deadline::create_user_copy(db, creator.id, &deadline, &course).await?;
    factory::deadline::create_user_copy(db, classmate.id, &deadline, &course).await?;

    let repo = UserDeadlineRepository::new(db);
    repo.set_completed(classmate.id, &deadline.id, true, Utc::now())
        .await?;

    let updated = repo
        .update_copies(
            &deadline.id,
            &UpdateDeadlineParam {
                title: Some("Quiz 2".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated, 2);
    let copy = repo.find(classmate.id, &deadline.id).await?.unwrap();
    assert_eq!(copy.title, "Quiz 2");
    assert!(copy.completed);

    Ok(())
}

/// Tests removing all copies of a deadline.
///
/// Expected: Ok(2) and no copies left
#[tokio::test]
async fn deletes_every_copy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let classmate = factory::create_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, creator.id)
        .build()
        .await?;
    factory::deadline::create_user_copy(db, creator.id, &deadline, &course).await?;
    factory::deadline::create_user_copy(db, classmate.id, &deadline, &course).await?;

    let repo = UserDeadlineRepository::new(db);
    let deleted = repo.delete_copies(&deadline.id).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find(creator.id, &deadline.id).await?.is_none());

    Ok(())
}
