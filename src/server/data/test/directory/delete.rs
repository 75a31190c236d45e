use super::*;

/// Tests deleting a directory with subdirectories and resources.
///
/// Expected: Ok with the directory tree and every resource inside it removed
#[tokio::test]
async fn deletes_tree_and_resources() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let main = DirectoryFactory::new(db, "CSE110").build().await?;
    let theory = DirectoryFactory::new(db, "CSE110")
        .subdirectory_of(main.id, "theory")
        .build()
        .await?;
    let in_main = ResourceFactory::new(db, "CSE110").directory(main.id).build().await?;
    let in_theory = ResourceFactory::new(db, "CSE110").directory(theory.id).build().await?;
    let elsewhere = ResourceFactory::new(db, "CSE110").build().await?;

    DirectoryRepository::new(db).delete(main.id).await?;

    let repo = DirectoryRepository::new(db);
    assert!(repo.find_by_id(main.id).await?.is_none());
    assert!(repo.find_by_id(theory.id).await?.is_none());

    let resources = crate::server::data::resource::ResourceRepository::new(db);
    assert!(resources.find_by_id(in_main.id).await?.is_none());
    assert!(resources.find_by_id(in_theory.id).await?.is_none());
    assert!(resources.find_by_id(elsewhere.id).await?.is_some());

    Ok(())
}
