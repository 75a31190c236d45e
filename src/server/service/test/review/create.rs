use super::*;

fn param(course_id: i32) -> CreateReviewParam {
    CreateReviewParam {
        course_id,
        rating: 4,
        review_text: "Fair grading and clear lectures".to_string(),
    }
}

/// Tests that a second review of the same course is refused.
///
/// Expected: Ok, then Err(AppError::Conflict)
#[tokio::test]
async fn rejects_second_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = User::from_entity(factory::create_user(db).await?);
    let course = factory::create_course(db).await?;
    let service = ReviewService::new(db);

    let review = service.create(&author, param(course.id)).await?;
    let second = service.create(&author, param(course.id)).await;

    assert_eq!(review.author_name, author.name);
    assert!(matches!(second, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that reviewing an unknown course fails.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = User::from_entity(factory::create_user(db).await?);
    let result = ReviewService::new(db).create(&author, param(404)).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that only the author may delete a review.
///
/// Expected: Err(AppError::Forbidden) for others, Ok for the author
#[tokio::test]
async fn delete_requires_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let course = factory::create_course(db).await?;
    let review = factory::create_review(db, course.id, author.id, 5).await?;
    let service = ReviewService::new(db);

    let denied = service.delete(other.id, review.id).await;
    service.delete(author.id, review.id).await?;

    assert!(matches!(denied, Err(AppError::Forbidden(_))));
    assert!(service.get_for_course(course.id, None).await?.is_empty());

    Ok(())
}

/// Tests two simultaneous reviews of the same course by one author.
///
/// Expected: one review is stored, the other request gets Err(AppError::Conflict)
#[tokio::test]
async fn concurrent_duplicate_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = User::from_entity(factory::create_user(db).await?);
    let course = factory::create_course(db).await?;
    let service = ReviewService::new(db);

    let (first, second) = tokio::join!(
        service.create(&author, param(course.id)),
        service.create(&author, param(course.id)),
    );

    let stored = [&first, &second].iter().filter(|result| result.is_ok()).count();
    assert_eq!(stored, 1);
    assert!([first, second]
        .into_iter()
        .any(|result| matches!(result, Err(AppError::Conflict(_)))));
    assert_eq!(service.get_for_course(course.id, None).await?.len(), 1);

    Ok(())
}
