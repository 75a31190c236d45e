use super::*;

/// Tests that recommendations match interests against tags ignoring case.
///
/// Expected: only the event tagged "Robotics" is returned
#[tokio::test]
async fn matches_interest_tags() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::create_user(db).await?;
    let student = factory::create_user(db).await?;
    InterestRepository::new(db)
        .replace(student.id, &["robotics".to_string()])
        .await?;
    let matching = factory::event::EventFactory::new(db, club.id, admin.id)
        .tags(&["Robotics", "Hardware"])
        .build()
        .await?;
    factory::event::EventFactory::new(db, club.id, admin.id)
        .tags(&["Music"])
        .build()
        .await?;

    let page = EventService::new(db).get_recommended(student.id, 1, 10).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.events[0].id, matching.id);

    Ok(())
}

/// Tests that a user without interests gets an empty first page.
///
/// Expected: no events and page 1
#[tokio::test]
async fn empty_without_interests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::create_user(db).await?;
    let student = factory::create_user(db).await?;
    factory::event::EventFactory::new(db, club.id, admin.id)
        .tags(&["Robotics"])
        .build()
        .await?;

    let page = EventService::new(db).get_recommended(student.id, 3, 10).await?;

    assert!(page.events.is_empty());
    assert_eq!(page.page, 1);

    Ok(())
}

/// Tests that an enormous page number is capped rather than overflowing.
///
/// Expected: empty pages for both listings, with the capped page number reported
#[tokio::test]
async fn caps_huge_page_numbers() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::create_user(db).await?;
    let student = factory::create_user(db).await?;
    InterestRepository::new(db)
        .replace(student.id, &["robotics".to_string()])
        .await?;
    factory::event::EventFactory::new(db, club.id, admin.id)
        .tags(&["Robotics"])
        .build()
        .await?;

    let service = EventService::new(db);

    let upcoming = service.get_upcoming(u64::MAX, 50).await?;
    assert!(upcoming.events.is_empty());
    assert_eq!(upcoming.total, 1);
    assert_eq!(upcoming.page, MAX_PAGE);

    let recommended = service.get_recommended(student.id, u64::MAX, 50).await?;
    assert!(recommended.events.is_empty());
    assert_eq!(recommended.total, 1);
    assert_eq!(recommended.page, MAX_PAGE);

    Ok(())
}
