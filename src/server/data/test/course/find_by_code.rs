use super::*;

/// Tests looking a course up with a lowercase, padded code.
///
/// Expected: Ok(Some) with the stored course
#[tokio::test]
async fn normalizes_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .course_code("CSE110")
        .build()
        .await?;

    let course = CourseRepository::new(db).find_by_code(" cse110 ").await?;

    assert_eq!(course.map(|c| c.course_code).as_deref(), Some("CSE110"));

    Ok(())
}

/// Tests an unknown code.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseRepository::new(db).find_by_code("MAT999").await?;

    assert!(course.is_none());

    Ok(())
}
