use super::*;

/// Tests that a created directory takes its course name from the catalog.
///
/// Expected: owned by the creator, course name filled in
#[tokio::test]
async fn create_fills_course_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    course_with_sections(db, "CSE220", false).await?;

    let directory = DirectoryService::new(db)
        .create_private(
            owner.id,
            CreateDirectoryParam {
                course_code: "CSE220".to_string(),
                course_name: String::new(),
                title: "Midterm prep".to_string(),
                visibility: Visibility::Connections,
            },
        )
        .await?;

    assert_eq!(directory.owner_id, Some(owner.id));
    assert_eq!(directory.course_name, "CSE220 course");
    assert_eq!(directory.visibility, Visibility::Connections);

    Ok(())
}

/// Tests that another user can neither read, change nor delete a directory.
///
/// Expected: Err(AppError::NotFound) for every operation, directory unchanged
#[tokio::test]
async fn rejects_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let directory = DirectoryFactory::new(db, "CSE110")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;
    let http_client = reqwest::Client::new();
    let settings = storage_settings();
    let storage = StorageClient::new(&http_client, &settings);
    let service = DirectoryService::new(db);

    assert!(matches!(
        service.get_owned(intruder.id, directory.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .set_visibility(intruder.id, directory.id, Visibility::Connections)
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .delete_owned(intruder.id, directory.id, &storage, &settings.bucket)
            .await,
        Err(AppError::NotFound(_))
    ));

    let view = service.get_owned(owner.id, directory.id).await?;
    assert_eq!(view.directory.visibility, Visibility::Private);

    Ok(())
}

/// Tests that the owner can change visibility and delete the directory.
///
/// Expected: visibility updated, then the directory is gone
#[tokio::test]
async fn owner_updates_and_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let directory = DirectoryFactory::new(db, "CSE110")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;
    let http_client = reqwest::Client::new();
    let settings = storage_settings();
    let storage = StorageClient::new(&http_client, &settings);
    let service = DirectoryService::new(db);

    let updated = service
        .set_visibility(owner.id, directory.id, Visibility::Connections)
        .await?;
    assert_eq!(updated.visibility, Visibility::Connections);

    service
        .delete_owned(owner.id, directory.id, &storage, &settings.bucket)
        .await?;

    assert!(matches!(
        service.get_owned(owner.id, directory.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
