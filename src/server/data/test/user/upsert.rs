use super::*;

fn param(external_id: &str, name: &str, username: &str) -> NewUserParam {
    NewUserParam {
        external_id: external_id.to_string(),
        name: name.to_string(),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        student_id: "20101001".to_string(),
        picture_url: String::new(),
    }
}

/// Tests registering a new user.
///
/// Expected: Ok with the default theme and no admin rights
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param("ext-1", "Nadia Islam", "nadia")).await?;

    assert_eq!(user.external_id, "ext-1");
    assert_eq!(user.username, "nadia");
    assert_eq!(user.theme_color, "blue");
    assert!(!user.is_admin);

    Ok(())
}

/// Tests upserting an existing user under a different username.
///
/// Verifies that identity columns are refreshed while the username chosen at first
/// registration is kept.
///
/// Expected: Ok with the new name and the original username
#[tokio::test]
async fn keeps_username_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(param("ext-1", "Nadia Islam", "nadia")).await?;
    let second = repo.upsert(param("ext-1", "Nadia I.", "other")).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "Nadia I.");
    assert_eq!(second.username, "nadia");

    Ok(())
}
