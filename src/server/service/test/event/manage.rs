use super::*;
use crate::server::model::event::{CreateEventParam, UpdateEventParam};

fn create_param() -> CreateEventParam {
    CreateEventParam {
        title: "Robot night".to_string(),
        description: "Build and race".to_string(),
        date: (Utc::now() + Duration::days(5)).date_naive(),
        time: "17:30".to_string(),
        location: "Lab 4".to_string(),
        tags: vec!["robotics".to_string()],
        image_url: None,
        image_path: None,
        image_bucket: None,
    }
}

/// Tests that a club admin creates events under their own club.
///
/// Expected: Ok with the admin's club and tags stored
#[tokio::test]
async fn admin_creates_for_own_club() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(club.id).build().await?;
    let admin = User::from_entity(admin);
    let service = EventService::new(db);

    let event = service.create(&admin, create_param()).await?;
    let listed = service.get_club_events(&admin).await?;

    assert_eq!(event.club_id, club.id);
    assert_eq!(event.tags, vec!["robotics".to_string()]);
    assert_eq!(listed.len(), 1);

    Ok(())
}

/// Tests that non-admins cannot create events.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_non_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::create_user(db).await?);
    let result = EventService::new(db).create(&user, create_param()).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that an admin cannot edit another club's event.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_other_club_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let own_club = factory::create_club(db).await?;
    let other_club = factory::create_club(db).await?;
    let admin = factory::user::UserFactory::new(db).club_admin(own_club.id).build().await?;
    let event = factory::create_event(db, other_club.id, admin.id).await?;

    let param = UpdateEventParam {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let result = EventService::new(db)
        .update(&User::from_entity(admin), event.id, param)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}
