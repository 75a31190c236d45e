use super::*;

/// Tests validating a catalog course with no public directory yet.
///
/// Expected: Valid with the catalog name and lab flag
#[tokio::test]
async fn accepts_new_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    course_with_sections(db, "CSE110", true).await?;

    let result = DirectoryService::new(db).validate(" cse110 ", false).await?;

    assert_eq!(
        result,
        DirectoryValidation::Valid {
            has_lab: true,
            course_name: "CSE110 course".to_string(),
        }
    );

    Ok(())
}

/// Tests that a course which already has a public directory is reported as a duplicate.
///
/// Expected: Invalid unless duplicates are ignored
#[tokio::test]
async fn rejects_duplicate_unless_ignored() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    course_with_sections(db, "CSE110", false).await?;
    let service = DirectoryService::new(db);
    service.ensure_system_directories().await?;

    assert!(matches!(
        service.validate("CSE110", false).await?,
        DirectoryValidation::Invalid(_)
    ));
    assert!(matches!(
        service.validate("CSE110", true).await?,
        DirectoryValidation::Valid { has_lab: false, .. }
    ));

    Ok(())
}

/// Tests that unknown and blank course codes are invalid.
///
/// Expected: Invalid for both
#[tokio::test]
async fn rejects_unknown_course() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DirectoryService::new(db);

    assert!(matches!(
        service.validate("XYZ999", false).await?,
        DirectoryValidation::Invalid(_)
    ));
    assert!(matches!(
        service.validate("  ", false).await?,
        DirectoryValidation::Invalid(_)
    ));

    Ok(())
}
