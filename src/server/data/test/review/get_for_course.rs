use super::*;

/// Tests listing a course's reviews with author names and votes.
///
/// Expected: Ok with the newest review first and the viewer's vote reported
#[tokio::test]
async fn lists_newest_first_with_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _) = factory::create_course_with_section(db).await?;
    let first_author = factory::create_user_named(db, "First").await?;
    let second_author = factory::create_user_named(db, "Second").await?;
    let voter = factory::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    let older = factory::create_review(db, course.id, first_author.id, 4).await?;
    let newer = repo
        .create(
            second_author.id,
            second_author.name.clone(),
            &CreateReviewParam {
                course_id: course.id,
                rating: 2,
                review_text: "Hard exams".to_string(),
            },
            Utc::now() + chrono::Duration::seconds(5),
        )
        .await?;
    repo.set_vote(older.id, voter.id, true).await?;

    let reviews = repo.get_for_course(course.id, Some(voter.id)).await?;

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id, newer.id);
    assert_eq!(reviews[1].author_name, "First");
    assert_eq!(reviews[1].votes.positive, 1);
    assert_eq!(reviews[1].votes.viewer, Some(true));
    assert_eq!(reviews[0].votes.viewer, None);

    Ok(())
}

/// Tests the one-review-per-course check.
///
/// Expected: Ok(true) for the author, Ok(false) for someone else
#[tokio::test]
async fn detects_existing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (course, _) = factory::create_course_with_section(db).await?;
    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_review(db, course.id, author.id, 5).await?;

    let repo = ReviewRepository::new(db);

    assert!(repo.exists(course.id, author.id).await?);
    assert!(!repo.exists(course.id, other.id).await?);

    Ok(())
}
