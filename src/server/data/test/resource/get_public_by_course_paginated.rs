use super::*;

/// Tests the text filter and the exclusion of private resources.
///
/// Expected: Ok with the matching public resource only
#[tokio::test]
async fn filters_by_title_and_visibility() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let matching = ResourceFactory::new(db, "CSE110")
        .title("Loops cheat sheet")
        .build()
        .await?;
    ResourceFactory::new(db, "CSE110").title("Recursion").build().await?;
    ResourceFactory::new(db, "CSE110")
        .title("Private loops notes")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;
    ResourceFactory::new(db, "CSE220").title("Loops again").build().await?;

    let (resources, total) = ResourceRepository::new(db)
        .get_public_by_course_paginated("CSE110", Some("LOOPS"), 1, 12)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(resources[0].id, matching.id);

    Ok(())
}

/// Tests paging without a filter.
///
/// Expected: Ok with a full first page and the remainder on the second
#[tokio::test]
async fn pages_results() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        ResourceFactory::new(db, "CSE110").build().await?;
    }

    let repo = ResourceRepository::new(db);
    let (first, total) = repo.get_public_by_course_paginated("CSE110", None, 1, 2).await?;
    let (second, _) = repo.get_public_by_course_paginated("CSE110", None, 2, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}
