use super::*;

/// Tests that only public main directories are listed.
///
/// Expected: Ok with the system main directory only
#[tokio::test]
async fn lists_public_main_directories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let main = DirectoryFactory::new(db, "CSE110").build().await?;
    DirectoryFactory::new(db, "CSE110")
        .subdirectory_of(main.id, "theory")
        .build()
        .await?;
    DirectoryFactory::new(db, "CSE110")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;

    let (items, total) = DirectoryRepository::new(db)
        .get_public_paginated(&query(None, DirectorySort::CodeAsc))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(items[0].id, main.id);

    Ok(())
}

/// Tests prefix search on the course code and sort order.
///
/// Expected: Ok with the two CSE directories in descending code order
#[tokio::test]
async fn filters_by_code_prefix_and_sorts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    DirectoryFactory::new(db, "CSE110").build().await?;
    DirectoryFactory::new(db, "CSE220").build().await?;
    DirectoryFactory::new(db, "MAT110").build().await?;

    let (items, total) = DirectoryRepository::new(db)
        .get_public_paginated(&query(Some("cse"), DirectorySort::CodeDesc))
        .await?;

    assert_eq!(total, 2);
    let codes: Vec<&str> = items.iter().map(|d| d.course_code.as_str()).collect();
    assert_eq!(codes, vec!["CSE220", "CSE110"]);

    Ok(())
}

/// Tests the owner listing, which excludes public directories.
///
/// Expected: Ok with the two non-public directories of the owner
#[tokio::test]
async fn owner_listing_excludes_public() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    DirectoryFactory::new(db, "CSE110").owner(owner.id).visibility("private").build().await?;
    DirectoryFactory::new(db, "CSE220").owner(owner.id).visibility("connections").build().await?;
    DirectoryFactory::new(db, "CSE330").owner(owner.id).build().await?;
    DirectoryFactory::new(db, "CSE110").owner(other.id).visibility("private").build().await?;

    let (items, total) = DirectoryRepository::new(db)
        .get_owned_paginated(owner.id, &query(None, DirectorySort::CodeAsc))
        .await?;

    assert_eq!(total, 2);
    assert!(items.iter().all(|d| d.visibility != Visibility::Public));

    Ok(())
}
