use super::*;

/// Tests per-directory counts.
///
/// Expected: Ok with two resources in the first directory and none listed for the second
#[tokio::test]
async fn counts_resources_per_directory() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = DirectoryFactory::new(db, "CSE110").build().await?;
    let second = DirectoryFactory::new(db, "CSE220").build().await?;
    ResourceFactory::new(db, "CSE110").directory(first.id).build().await?;
    ResourceFactory::new(db, "CSE110").directory(first.id).build().await?;
    ResourceFactory::new(db, "CSE110").build().await?;

    let counts = ResourceRepository::new(db)
        .count_by_directory(&[first.id, second.id])
        .await?;

    assert_eq!(counts.get(&first.id), Some(&2));
    assert_eq!(counts.get(&second.id), None);

    Ok(())
}

/// Tests counting public resources uploaded without a directory.
///
/// Expected: Ok with one unfiled public resource for the course
#[tokio::test]
async fn counts_unfiled_public_resources() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let directory = DirectoryFactory::new(db, "CSE110").build().await?;
    ResourceFactory::new(db, "CSE110").build().await?;
    ResourceFactory::new(db, "CSE110").directory(directory.id).build().await?;
    ResourceFactory::new(db, "CSE110")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;

    let counts = ResourceRepository::new(db)
        .count_unfiled_by_course(&["CSE110".to_string()])
        .await?;

    assert_eq!(counts.get("CSE110"), Some(&1));

    Ok(())
}
