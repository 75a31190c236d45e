use super::*;

/// Tests replacing a user's enrollments.
///
/// Expected: Ok with only the newly selected course
#[tokio::test]
async fn replaces_all_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, first, _) = factory::create_enrolled_user(db).await?;
    let (second, section) = factory::create_course_with_section(db).await?;

    let repo = EnrollmentRepository::new(db);
    repo.replace(
        user.id,
        &[SelectedCourse {
            course_id: second.id,
            section: section.name.clone(),
        }],
    )
    .await?;

    let enrollments = repo.get_for_user(user.id).await?;
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].course_id, second.id);
    assert_eq!(enrollments[0].course_code, second.course_code);
    assert!(repo.find_section(user.id, first.id).await?.is_none());

    Ok(())
}
