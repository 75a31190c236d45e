use super::*;

/// Tests a partial update that also replaces the tags.
///
/// Expected: Ok(Some) with the new title and tags and the original location
#[tokio::test]
async fn updates_fields_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(club.id).build().await?;
    let entity = factory::event::EventFactory::new(db, club.id, admin.id)
        .tags(&["music"])
        .build()
        .await?;

    let event = EventRepository::new(db)
        .update(
            entity.id,
            UpdateEventParam {
                title: Some("Open Mic".to_string()),
                tags: Some(vec!["art".to_string()]),
                ..Default::default()
            },
            Utc::now(),
        )
        .await?
        .unwrap();

    assert_eq!(event.title, "Open Mic");
    assert_eq!(event.location, entity.location);
    assert_eq!(event.tags, vec!["art"]);

    Ok(())
}

/// Tests updating an event that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventRepository::new(db)
        .update(404, UpdateEventParam::default(), Utc::now())
        .await?;

    assert!(result.is_none());

    Ok(())
}
