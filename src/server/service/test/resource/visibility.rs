use super::*;

/// Tests that private resources are only visible to their owner.
///
/// Expected: owner true, stranger false, anonymous false
#[tokio::test]
async fn private_visible_to_owner_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let resource = ResourceFactory::new(db, "CSE220")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;
    let resource = Resource::from_entity(resource)?;
    let service = ResourceService::new(db);

    assert!(service.can_view(&resource, Some(owner.id)).await?);
    assert!(!service.can_view(&resource, Some(stranger.id)).await?);
    assert!(!service.can_view(&resource, None).await?);

    Ok(())
}

/// Tests that connection-only resources need an accepted connection.
///
/// Expected: accepted connection true, pending request false
#[tokio::test]
async fn connections_need_accepted_edge() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let friend = factory::create_user(db).await?;
    let requester = factory::create_user(db).await?;
    factory::connect(db, friend.id, owner.id).await?;
    factory::create_connection(db, requester.id, owner.id, "pending").await?;
    let resource = ResourceFactory::new(db, "CSE220")
        .owner(owner.id)
        .visibility("connections")
        .build()
        .await?;
    let resource = Resource::from_entity(resource)?;
    let service = ResourceService::new(db);

    assert!(service.can_view(&resource, Some(friend.id)).await?);
    assert!(!service.can_view(&resource, Some(requester.id)).await?);

    Ok(())
}

/// Tests that an inheriting resource takes the visibility of its directory.
///
/// Expected: hidden from strangers once the directory turns private
#[tokio::test]
async fn inherits_directory_visibility() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let directory = DirectoryFactory::new(db, "CSE220")
        .owner(owner.id)
        .visibility("private")
        .build()
        .await?;
    let resource = ResourceFactory::new(db, "CSE220")
        .owner(owner.id)
        .directory(directory.id)
        .visibility("public")
        .inherit_visibility(true)
        .build()
        .await?;
    let resource = Resource::from_entity(resource)?;

    let visible = ResourceService::new(db)
        .can_view(&resource, Some(stranger.id))
        .await?;

    assert!(!visible);

    Ok(())
}
