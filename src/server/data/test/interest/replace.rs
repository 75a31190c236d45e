use super::*;

/// Tests replacing a user's interests.
///
/// Expected: Ok with only the new list, in submitted order
#[tokio::test]
async fn replaces_previous_interests() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = InterestRepository::new(db);
    repo.replace(user.id, &["chess".to_string(), "robotics".to_string()])
        .await?;
    repo.replace(user.id, &["robotics".to_string(), "ai".to_string()])
        .await?;

    assert_eq!(repo.get(user.id).await?, vec!["robotics", "ai"]);

    Ok(())
}

/// Tests clearing interests with an empty list.
///
/// Expected: Ok with no interests left
#[tokio::test]
async fn clears_with_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = InterestRepository::new(db);
    repo.replace(user.id, &["chess".to_string()]).await?;
    repo.replace(user.id, &[]).await?;

    assert!(repo.get(user.id).await?.is_empty());

    Ok(())
}
