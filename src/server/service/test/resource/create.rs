use super::*;

/// Tests that a private upload into an owned directory follows the directory.
///
/// Expected: Ok with inherit_visibility set
#[tokio::test]
async fn private_upload_inherits_directory() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let directory = DirectoryFactory::new(db, "CSE220")
        .owner(owner.id)
        .visibility("connections")
        .build()
        .await?;

    let resource = ResourceService::new(db)
        .create(
            &User::from_entity(owner),
            link_param("CSE220", Some(directory.id)),
            Visibility::Private,
        )
        .await?;

    assert!(resource.inherit_visibility);
    assert_eq!(resource.directory_id, Some(directory.id));

    Ok(())
}

/// Tests that uploads into someone else's private directory are refused.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_foreign_private_directory() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = User::from_entity(factory::create_user(db).await?);
    let directory = DirectoryFactory::new(db, "CSE220")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;

    let result = ResourceService::new(db)
        .create(&intruder, link_param("CSE220", Some(directory.id)), Visibility::Private)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a main directory split into subdirectories takes no direct uploads.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_main_directory_with_subdirectories() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let uploader = User::from_entity(factory::create_user(db).await?);
    let main = DirectoryFactory::new(db, "CSE220").build().await?;
    DirectoryFactory::new(db, "CSE220")
        .subdirectory_of(main.id, "lab")
        .build()
        .await?;

    let result = ResourceService::new(db)
        .create(&uploader, link_param("CSE220", Some(main.id)), Visibility::Public)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
