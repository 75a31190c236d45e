use super::*;

/// Tests listing the users of one section.
///
/// Expected: Ok with users of that section only
#[tokio::test]
async fn lists_only_matching_section() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, section) = factory::create_course_with_section(db).await?;
    factory::create_section(db, course.id, "2").await?;
    let in_section = factory::create_user(db).await?;
    let other_section = factory::create_user(db).await?;
    factory::enroll(db, in_section.id, course.id, &section.name).await?;
    factory::enroll(db, other_section.id, course.id, "2").await?;

    let ids = EnrollmentRepository::new(db)
        .user_ids_in_section(course.id, &section.name)
        .await?;

    assert_eq!(ids, vec![in_section.id]);

    Ok(())
}
