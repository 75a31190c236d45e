use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the supplied fields change and every other column keeps its
/// previous value.
///
/// Expected: Ok(Some) with bio set and name unchanged
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_named(db, "Nadia Islam").await?;

    let repo = UserRepository::new(db);
    let mut param = UpdateProfileParam::default();
    param.profile.bio = Some("CSE undergrad".to_string());
    param.theme_color = Some("green".to_string());

    let updated = repo.update_profile(user.id, param).await?.unwrap();

    assert_eq!(updated.name, "Nadia Islam");
    assert_eq!(updated.theme_color, "green");
    assert_eq!(updated.profile.bio.as_deref(), Some("CSE undergrad"));
    assert_eq!(updated.profile.phone, None);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update_profile(999, UpdateProfileParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
