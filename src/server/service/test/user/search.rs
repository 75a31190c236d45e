use super::*;

/// Tests that first-name matches rank above second-word and username matches.
///
/// Expected: Ana Rahman, Zara Anand, Bob Smith in that order
#[tokio::test]
async fn ranks_by_match_position() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Bob Smith").username("ana_b").build().await?;
    UserFactory::new(db).name("Zara Anand").username("zara").build().await?;
    UserFactory::new(db).name("Ana Rahman").username("rahman").build().await?;
    UserFactory::new(db).name("Carl Dunn").username("carl").build().await?;

    let names: Vec<String> = UserService::new(db)
        .search(Some("ana"), None)
        .await?
        .into_iter()
        .map(|user| user.name)
        .collect();

    assert_eq!(names, vec!["Ana Rahman", "Zara Anand", "Bob Smith"]);

    Ok(())
}

/// Tests that a first-name match outranks many second-word matches that sort before it.
///
/// Expected: Rafi Ahmed first, then the nine alphabetically first second-word matches
#[tokio::test]
async fn keeps_first_name_match_behind_many_lower_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for n in 0..55 {
        UserFactory::new(db)
            .name(format!("A{:02} Rahman", n))
            .build()
            .await?;
    }
    UserFactory::new(db).name("Rafi Ahmed").build().await?;

    let names: Vec<String> = UserService::new(db)
        .search(Some("ra"), None)
        .await?
        .into_iter()
        .map(|user| user.name)
        .collect();

    let mut expected = vec!["Rafi Ahmed".to_string()];
    expected.extend((0..9).map(|n| format!("A{:02} Rahman", n)));
    assert_eq!(names, expected);

    Ok(())
}

/// Tests that a name whose third word matches is not treated as a second-word match.
///
/// Expected: only the second-word match is returned
#[tokio::test]
async fn ignores_third_word_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).name("Md Karim Rabbani").build().await?;
    UserFactory::new(db).name("Tanvir Rahman").build().await?;

    let names: Vec<String> = UserService::new(db)
        .search(Some("ra"), None)
        .await?
        .into_iter()
        .map(|user| user.name)
        .collect();

    assert_eq!(names, vec!["Tanvir Rahman"]);

    Ok(())
}

/// Tests that a malformed exclude email is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_malformed_exclude_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .search(Some("ra"), Some("not-an-email"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that the searcher is left out of their own results.
///
/// Expected: only the other user
#[tokio::test]
async fn excludes_searcher() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let me = UserFactory::new(db)
        .name("Nadia Islam")
        .email("nadia@example.com")
        .build()
        .await?;
    let other = UserFactory::new(db).name("Nadia Karim").build().await?;

    let found = UserService::new(db)
        .search(Some("nadia"), Some(&me.email))
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, other.id);

    Ok(())
}

/// Tests that a blank query is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_blank_query() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db).search(Some("   "), None).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
