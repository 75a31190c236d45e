use super::*;

/// Tests that a new deadline is copied to the section's students only.
///
/// Expected: copies for the creator and the classmate, none for the other section
#[tokio::test]
async fn copies_to_section_members_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let classmate = factory::create_user(db).await?;
    factory::enroll(db, classmate.id, course.id, &section.name).await?;
    let other_section = factory::create_section(db, course.id, "2").await?;
    let outsider = factory::create_user(db).await?;
    factory::enroll(db, outsider.id, course.id, &other_section.name).await?;

    let view = DeadlineService::new(db)
        .create(&User::from_entity(creator.clone()), create_param(course.id, &section.name))
        .await?;

    let mut holders: Vec<i32> = entity::prelude::UserDeadline::find()
        .filter(entity::user_deadline::Column::DeadlineId.eq(view.deadline.id.as_str()))
        .all(db)
        .await?
        .into_iter()
        .map(|copy| copy.user_id)
        .collect();
    holders.sort_unstable();

    let mut expected = vec![creator.id, classmate.id];
    expected.sort_unstable();
    assert_eq!(holders, expected);

    Ok(())
}

/// Tests that a lab deadline requires a section with a lab.
///
/// Expected: Err(BadRequest) and no deadline stored
#[tokio::test]
async fn rejects_lab_without_lab_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (creator, course, section) = factory::create_enrolled_user(db).await?;
    let param = CreateDeadlineParam {
        kind: ClassKind::Lab,
        ..create_param(course.id, &section.name)
    };

    let result = DeadlineService::new(db)
        .create(&User::from_entity(creator), param)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(entity::prelude::Deadline::find().all(db).await?.is_empty());

    Ok(())
}
