use super::*;

/// Tests cancelling and reactivating a registration.
///
/// Expected: Ok with the status flipped each time and a single row kept
#[tokio::test]
async fn flips_status_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(club.id).build().await?;
    let event = factory::create_event(db, club.id, admin.id).await?;
    let user = factory::create_user(db).await?;

    let repo = RegistrationRepository::new(db);
    repo.create(event.id, user.id, Utc::now()).await?;

    repo.set_status(event.id, user.id, RegistrationStatus::Cancelled, Utc::now())
        .await?;
    let registration = repo.find(event.id, user.id).await?.unwrap();
    assert_eq!(registration.status, RegistrationStatus::Cancelled);
    assert!(repo.get_active_for_user(user.id).await?.is_empty());

    repo.set_status(event.id, user.id, RegistrationStatus::Registered, Utc::now())
        .await?;
    assert_eq!(repo.get_active_for_user(user.id).await?.len(), 1);

    Ok(())
}
