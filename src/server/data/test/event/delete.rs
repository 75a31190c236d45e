use super::*;

/// Tests deleting an event with registrations and tags.
///
/// Expected: Ok with the event gone and no registration left behind
#[tokio::test]
async fn deletes_event_and_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(club.id).build().await?;
    let attendee = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, club.id, admin.id)
        .tags(&["music"])
        .build()
        .await?;
    factory::create_registration(db, event.id, attendee.id, "registered").await?;

    let repo = EventRepository::new(db);
    repo.delete(event.id).await?;

    assert!(repo.find_by_id(event.id).await?.is_none());
    let registrations = crate::server::data::registration::RegistrationRepository::new(db)
        .get_active_for_user(attendee.id)
        .await?;
    assert!(registrations.is_empty());

    Ok(())
}
