use super::*;

/// Tests that registering twice keeps a single active registration.
///
/// Expected: Registered, then AlreadyRegistered, one registrant listed
#[tokio::test]
async fn duplicate_registration_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(club.id).build().await?;
    let student = factory::create_user(db).await?;
    let event = factory::create_event(db, club.id, admin.id).await?;
    let service = EventService::new(db);

    assert_eq!(service.register(student.id, event.id).await?, RegisterOutcome::Registered);
    assert_eq!(
        service.register(student.id, event.id).await?,
        RegisterOutcome::AlreadyRegistered
    );

    let registrants = service
        .get_registrants(&User::from_entity(admin), event.id)
        .await?;
    assert_eq!(registrants.len(), 1);

    Ok(())
}

/// Tests that a cancelled registration comes back on the next register.
///
/// Expected: Reactivated, event listed in the user's registrations
#[tokio::test]
async fn reactivates_cancelled_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::create_user(db).await?;
    let student = factory::create_user(db).await?;
    let event = factory::create_event(db, club.id, admin.id).await?;
    factory::create_registration(db, event.id, student.id, "cancelled").await?;
    let service = EventService::new(db);

    let outcome = service.register(student.id, event.id).await?;
    let registered = service.get_registered(student.id).await?;

    assert_eq!(outcome, RegisterOutcome::Reactivated);
    assert_eq!(registered.len(), 1);
    assert_eq!(registered[0].event.id, event.id);

    Ok(())
}

/// Tests that registration closes once the event has started.
///
/// Expected: Err(AppError::BadRequest) for register and cancel
#[tokio::test]
async fn closes_after_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::create_user(db).await?;
    let student = factory::create_user(db).await?;
    let event = factory::event::EventFactory::new(db, club.id, admin.id)
        .date((Utc::now() - Duration::days(2)).date_naive())
        .build()
        .await?;
    factory::create_registration(db, event.id, student.id, "registered").await?;
    let service = EventService::new(db);

    let register = service.register(student.id, event.id).await;
    let cancel = service.cancel_registration(student.id, event.id).await;

    assert!(matches!(register, Err(AppError::BadRequest(_))));
    assert!(matches!(cancel, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that cancelling without an active registration fails.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn cancel_requires_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::create_user(db).await?;
    let student = factory::create_user(db).await?;
    let event = factory::create_event(db, club.id, admin.id).await?;

    let result = EventService::new(db)
        .cancel_registration(student.id, event.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two simultaneous registrations by the same user.
///
/// Expected: one Registered and one AlreadyRegistered, a single registrant
#[tokio::test]
async fn concurrent_registration_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(club.id).build().await?;
    let student = factory::create_user(db).await?;
    let event = factory::create_event(db, club.id, admin.id).await?;
    let service = EventService::new(db);

    let (first, second) = tokio::join!(
        service.register(student.id, event.id),
        service.register(student.id, event.id),
    );

    let mut outcomes = vec![first?, second?];
    outcomes.sort_by_key(|outcome| *outcome == RegisterOutcome::AlreadyRegistered);
    assert_eq!(
        outcomes,
        vec![RegisterOutcome::Registered, RegisterOutcome::AlreadyRegistered]
    );

    let registrants = service
        .get_registrants(&User::from_entity(admin), event.id)
        .await?;
    assert_eq!(registrants.len(), 1);

    Ok(())
}
