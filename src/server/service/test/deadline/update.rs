use super::*;

/// Tests that an edit inside the 24 hour window reaches every copy.
///
/// Expected: Ok and both copies carry the new title
#[tokio::test]
async fn updates_every_copy() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let classmate = factory::create_user(db).await?;
    factory::enroll(db, classmate.id, course.id, &section.name).await?;
    let creator = User::from_entity(creator);
    let service = DeadlineService::new(db);
    let view = service
        .create(&creator, create_param(course.id, &section.name))
        .await?;

    let param = UpdateDeadlineParam {
        title: Some("Problem set 1 (revised)".to_string()),
        ..Default::default()
    };
    service.update(&creator, &view.deadline.id, param).await?;

    let titles: Vec<String> = entity::prelude::UserDeadline::find()
        .filter(entity::user_deadline::Column::DeadlineId.eq(view.deadline.id.as_str()))
        .all(db)
        .await?
        .into_iter()
        .map(|copy| copy.title)
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.iter().all(|title| title == "Problem set 1 (revised)"));

    Ok(())
}

/// Tests that edits and deletes are refused once the deadline is a day old.
///
/// Expected: Err(Forbidden) for both
#[tokio::test]
async fn rejects_changes_after_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, creator.id)
        .created_at(Utc::now() - Duration::hours(25))
        .build()
        .await?;
    let creator = User::from_entity(creator);
    let service = DeadlineService::new(db);

    let update = service
        .update(&creator, &deadline.id, UpdateDeadlineParam::default())
        .await;
    assert!(matches!(update, Err(AppError::Forbidden(_))));

    let delete = service.delete(&creator, &deadline.id).await;
    assert!(matches!(delete, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that only the creator may change a deadline.
///
/// Expected: Err(NotFound) for another user
#[tokio::test]
async fn hides_deadline_from_non_creator() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let other = factory::create_user(db).await?;
    let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, creator.id)
        .build()
        .await?;

    let result = DeadlineService::new(db)
        .delete(&User::from_entity(other), &deadline.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that deleting removes the deadline and all copies.
///
/// Expected: no deadline or copy rows left
#[tokio::test]
async fn delete_removes_copies() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let creator = User::from_entity(creator);
    let service = DeadlineService::new(db);
    let view = service
        .create(&creator, create_param(course.id, &section.name))
        .await?;

    service.delete(&creator, &view.deadline.id).await?;

    assert!(entity::prelude::Deadline::find().all(db).await?.is_empty());
    assert!(entity::prelude::UserDeadline::find().all(db).await?.is_empty());

    Ok(())
}
