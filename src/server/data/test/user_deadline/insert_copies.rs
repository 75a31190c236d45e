use super::*;

/// Tests fanning a deadline out inside a transaction.
///
/// Verifies that every recipient receives a copy carrying the denormalized course and
/// creator details, and that nobody else does.
///
/// Expected: Ok with one incomplete copy per recipient
#[tokio::test]
async fn copies_to_each_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let classmate = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let entity = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, creator.id)
        .build()
        .await?;
    let deadline = Deadline::from_entity(entity)?;

    let source = DeadlineCopySource {
        course_code: course.course_code.clone(),
        course_name: course.course_name.clone(),
        created_by_name: creator.name.clone(),
    };

    let txn = db.begin().await?;
    UserDeadlineRepository::new(&txn)
        .insert_copies(&deadline, &source, &[creator.id, classmate.id])
        .await?;
    txn.commit().await?;

    let repo = UserDeadlineRepository::new(db);
    let copy = repo.find(classmate.id, &deadline.id).await?.unwrap();
    assert_eq!(copy.course_code, course.course_code);
    assert_eq!(copy.created_by_name, creator.name);
    assert!(!copy.completed);
    assert!(repo.find(creator.id, &deadline.id).await?.is_some());
    assert!(repo.find(outsider.id, &deadline.id).await?.is_none());

    Ok(())
}

/// Tests that an empty recipient list writes nothing.
///
/// Expected: Ok without error
#[tokio::test]
async fn accepts_empty_recipient_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let entity = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, creator.id)
        .build()
        .await?;
    let deadline = Deadline::from_entity(entity)?;
    let source = DeadlineCopySource {
        course_code: course.course_code,
        course_name: course.course_name,
        created_by_name: creator.name,
    };

    let result = UserDeadlineRepository::new(db)
        .insert_copies(&deadline, &source, &[])
        .await;

    assert!(result.is_ok());

    Ok(())
}
