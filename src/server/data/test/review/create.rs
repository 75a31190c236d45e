use super::*;

/// Tests that the unique index refuses a second review by the same author.
///
/// Expected: Err recognised as a unique violation; other errors are not
#[tokio::test]
async fn duplicate_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let course = factory::create_course(db).await?;
    let param = CreateReviewParam {
        course_id: course.id,
        rating: 5,
        review_text: "Great course".to_string(),
    };

    let repo = ReviewRepository::new(db);
    repo.create(author.id, author.name.clone(), &param, Utc::now())
        .await?;
    let err = repo
        .create(author.id, author.name.clone(), &param, Utc::now())
        .await
        .unwrap_err();

    assert!(is_unique_violation(&err));
    assert!(!is_unique_violation(&DbErr::RecordNotFound("review".to_string())));

    Ok(())
}
