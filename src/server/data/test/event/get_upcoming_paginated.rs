use super::*;

/// Tests paging through upcoming events.
///
/// Verifies that past events are excluded, the rest ordered by date then time, and the
/// total counts every upcoming event.
///
/// Expected: Ok with the second page holding the latest event and a total of 3
#[tokio::test]
async fn pages_upcoming_events_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(club.id).build().await?;
    let today = Utc::now().date_naive();

    factory::event::EventFactory::new(db, club.id, admin.id)
        .title("Past")
        .date(today - Duration::days(1))
        .build()
        .await?;
    factory::event::EventFactory::new(db, club.id, admin.id)
        .title("Evening")
        .date(today)
        .time("19:00")
        .build()
        .await?;
    factory::event::EventFactory::new(db, club.id, admin.id)
        .title("Morning")
        .date(today)
        .time("09:00")
        .build()
        .await?;
    factory::event::EventFactory::new(db, club.id, admin.id)
        .title("Next week")
        .date(today + Duration::days(7))
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let (first, total) = repo.get_upcoming_paginated(today, 1, 2).await?;
    let (second, _) = repo.get_upcoming_paginated(today, 2, 2).await?;

    assert_eq!(total, 3);
    let titles: Vec<&str> = first.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Morning", "Evening"]);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].title, "Next week");

    Ok(())
}
