use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    factory::user::UserFactory::new(db).name("Rafi Ahmed").build().await?;
    factory::user::UserFactory::new(db).name("Tanvir Rahman").build().await?;
    factory::user::UserFactory::new(db)
        .name("Md Karim Rabbani")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("Someone Else")
        .username("ra_coder")
        .build()
        .await?;
    factory::user::UserFactory::new(db).name("Mehjabin Noor").build().await?;
    Ok(())
}

async fn names(
    repo: &UserRepository<'_>,
    tier: SearchTier,
    prefix: &str,
) -> Result<Vec<String>, DbErr> {
    Ok(repo
        .search_tier(tier, prefix, None, 10)
        .await?
        .into_iter()
        .map(|user| user.name)
        .collect())
}

/// Tests that each tier returns only its own kind of match.
///
/// Expected: first word, second word and username matches land in separate tiers;
/// a third-word match is in none of them
#[tokio::test]
async fn tiers_are_disjoint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(names(&repo, SearchTier::FirstWord, "ra").await?, vec!["Rafi Ahmed"]);
    assert_eq!(
        names(&repo, SearchTier::SecondWord, "ra").await?,
        vec!["Tanvir Rahman"]
    );
    assert_eq!(
        names(&repo, SearchTier::Username, "ra").await?,
        vec!["Someone Else"]
    );

    Ok(())
}

/// Tests that a user matching both the first word and the username is only in the
/// first-word tier.
///
/// Expected: Ok with an empty username tier
#[tokio::test]
async fn username_tier_skips_name_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Rafi Ahmed")
        .username("rafi")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(names(&repo, SearchTier::FirstWord, "raf").await?, vec!["Rafi Ahmed"]);
    assert!(names(&repo, SearchTier::Username, "raf").await?.is_empty());

    Ok(())
}

/// Tests that `%` and `_` in the prefix are matched literally.
///
/// Expected: `_` only matches a literal underscore in the username
#[tokio::test]
async fn matches_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        names(&repo, SearchTier::Username, "ra_").await?,
        vec!["Someone Else"]
    );
    assert!(names(&repo, SearchTier::FirstWord, "%").await?.is_empty());
    assert!(names(&repo, SearchTier::FirstWord, "_").await?.is_empty());

    Ok(())
}

/// Tests excluding the searcher by email.
///
/// Expected: Ok without the excluded user, regardless of email case
#[tokio::test]
async fn excludes_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Rafi Ahmed")
        .email("rafi@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db).name("Raisa Karim").build().await?;

    let repo = UserRepository::new(db);
    let users = repo
        .search_tier(SearchTier::FirstWord, "ra", Some("RAFI@example.com"), 10)
        .await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Raisa Karim");

    Ok(())
}
