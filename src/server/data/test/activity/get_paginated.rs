use super::*;

/// Tests filtering by resource type and newest-first ordering.
///
/// Expected: Ok with the two event entries, newest first, and a total of 2
#[tokio::test]
async fn filters_and_orders_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = ActivityRepository::new(db);
    let now = Utc::now();

    repo.create(
        user.id,
        NewActivity::new(ActivityAction::EventRegistered, "Registered")
            .resource(ActivityResourceType::Event, 1),
        now - Duration::minutes(2),
    )
    .await?;
    repo.create(
        user.id,
        NewActivity::new(ActivityAction::EventCancelled, "Cancelled")
            .resource(ActivityResourceType::Event, 1),
        now,
    )
    .await?;
    repo.create(
        user.id,
        NewActivity::new(ActivityAction::ProfileUpdated, "Profile"),
        now,
    )
    .await?;
    repo.create(
        other.id,
        NewActivity::new(ActivityAction::EventRegistered, "Someone else")
            .resource(ActivityResourceType::Event, 1),
        now,
    )
    .await?;

    let filter = ActivityFilter {
        action: None,
        resource_type: Some("event".to_string()),
    };
    let (entries, total) = repo.get_paginated(user.id, &filter, 1, 20).await?;

    assert_eq!(total, 2);
    let titles: Vec<&str> = entries.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Cancelled", "Registered"]);

    Ok(())
}

/// Tests that metadata survives storage as JSON.
///
/// Expected: Ok with the metadata object restored
#[tokio::test]
async fn stores_metadata_as_json() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = ActivityRepository::new(db);

    let created = repo
        .create(
            user.id,
            NewActivity::new(ActivityAction::ResourceUpload, "Uploaded notes")
                .metadata(serde_json::json!({ "courseCode": "CSE110" })),
            Utc::now(),
        )
        .await?;

    assert_eq!(
        created.metadata,
        Some(serde_json::json!({ "courseCode": "CSE110" }))
    );

    Ok(())
}

/// Tests that a page far past the end is empty instead of overflowing the offset.
///
/// Expected: Ok with no entries and the real total
#[tokio::test]
async fn handles_huge_page_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = ActivityRepository::new(db);
    repo.create(
        user.id,
        NewActivity::new(ActivityAction::ProfileUpdated, "Profile"),
        Utc::now(),
    )
    .await?;

    let filter = ActivityFilter {
        action: None,
        resource_type: None,
    };
    let (entries, total) = repo.get_paginated(user.id, &filter, u64::MAX, 100).await?;

    assert!(entries.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
