use super::*;

/// Tests listing active registrants with their contact details.
///
/// Expected: Ok with the registered attendee only and the default picture filled in
#[tokio::test]
async fn lists_active_registrants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(club.id).build().await?;
    let event = factory::create_event(db, club.id, admin.id).await?;
    let attending = factory::create_user_named(db, "Attending").await?;
    let cancelled = factory::create_user_named(db, "Cancelled").await?;
    factory::create_registration(db, event.id, attending.id, "registered").await?;
    factory::create_registration(db, event.id, cancelled.id, "cancelled").await?;

    let registrants = RegistrationRepository::new(db)
        .get_registrants(event.id)
        .await?;

    assert_eq!(registrants.len(), 1);
    assert_eq!(registrants[0].name, "Attending");
    assert_eq!(registrants[0].student_id, attending.student_id);
    assert_eq!(registrants[0].picture_url, "/logo.svg");

    Ok(())
}
