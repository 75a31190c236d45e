use super::*;

/// Tests creating an event with tags.
///
/// Expected: Ok with the club name and tags attached
#[tokio::test]
async fn creates_event_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::club::ClubFactory::new(db)
        .name("Robotics Club")
        .build()
        .await?;
    let admin = factory::user::UserFactory::new(db)
        .club_admin(club.id)
        .build()
        .await?;

    let event = EventRepository::new(db)
        .create(
            club.id,
            admin.id,
            CreateEventParam {
                title: "Robot Wars".to_string(),
                description: "Bring a bot".to_string(),
                date: NaiveDate::from_ymd_opt(2030, 5, 1).unwrap(),
                time: "15:00".to_string(),
                location: "Hall A".to_string(),
                tags: vec!["tech".to_string(), "robotics".to_string()],
                image_url: None,
                image_path: None,
                image_bucket: None,
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(event.club_name, "Robotics Club");
    assert_eq!(event.tags, vec!["robotics", "tech"]);
    assert_eq!(event.created_by, admin.id);

    Ok(())
}
