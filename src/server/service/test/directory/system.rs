use super::*;

/// Tests that system directories are created once per course.
///
/// Expected: 4 directories on the first run (main + Theory + Lab, and a lone main for
/// the course without a lab), none on the second
#[tokio::test]
async fn ensure_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    course_with_sections(db, "CSE110", true).await?;
    course_with_sections(db, "MAT120", false).await?;
    let service = DirectoryService::new(db);

    assert_eq!(service.ensure_system_directories().await?, 4);
    assert_eq!(service.ensure_system_directories().await?, 0);

    let system = DirectoryRepository::new(db).get_system().await?;
    assert_eq!(system.len(), 4);

    Ok(())
}

/// Tests that only courses with a lab section get `Theory` and `Lab` children.
///
/// Expected: two subdirectories under CSE110, none under MAT120
#[tokio::test]
async fn creates_subdirectories_only_for_lab_courses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    course_with_sections(db, "CSE110", true).await?;
    course_with_sections(db, "MAT120", false).await?;
    let service = DirectoryService::new(db);

    let page = service
        .get_public_page(DirectoryQuery::from_request(None, None, None, None, 50, 100))
        .await?;
    assert_eq!(page.total, 2);

    for item in page.items {
        let view = service.get_public(item.directory.id).await?;
        match view.directory.course_code.as_str() {
            "CSE110" => {
                let titles: Vec<&str> = view
                    .subdirectories
                    .iter()
                    .map(|sub| sub.directory.title.as_str())
                    .collect();
                assert_eq!(titles, vec!["Theory", "Lab"]);
            }
            "MAT120" => assert!(view.subdirectories.is_empty()),
            other => panic!("unexpected directory for {}", other),
        }
    }

    Ok(())
}

/// Tests that a user's private directory is not served as a public one.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_private_directories_from_public_lookup() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let private = DirectoryFactory::new(db, "CSE110")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;

    let result = DirectoryService::new(db).get_public(private.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
