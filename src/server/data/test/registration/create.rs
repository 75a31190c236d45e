use super::*;

/// Tests that a second insert for the same user and event is rejected by the key.
///
/// Expected: Err recognised as a unique violation
#[tokio::test]
async fn duplicate_is_unique_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::create_user(db).await?;
    let event = factory::create_event(db, club.id, admin.id).await?;
    let user = factory::create_user(db).await?;

    let repo = RegistrationRepository::new(db);
    repo.create(event.id, user.id, Utc::now()).await?;
    let err = repo.create(event.id, user.id, Utc::now()).await.unwrap_err();

    assert!(is_unique_violation(&err));

    Ok(())
}
