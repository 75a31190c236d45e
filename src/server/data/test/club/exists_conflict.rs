use super::*;

fn param(name: &str, email: &str, key: &str) -> CreateClubParam {
    CreateClubParam {
        name: name.to_string(),
        admin_email: email.to_string(),
        secret_key: key.to_string(),
    }
}

/// Tests that reusing any one of the unique fields is a conflict.
///
/// Expected: Ok(true) for each reused field
#[tokio::test]
async fn detects_each_unique_field() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::club::ClubFactory::new(db)
        .name("Robotics Club")
        .admin_email("robo@example.com")
        .secret_key("robo-key")
        .build()
        .await?;

    let repo = ClubRepository::new(db);

    assert!(repo.exists_conflict(&param("Robotics Club", "a@x.com", "k1")).await?);
    assert!(repo.exists_conflict(&param("Other", "robo@example.com", "k2")).await?);
    assert!(repo.exists_conflict(&param("Other", "b@x.com", "robo-key")).await?);
    assert!(!repo.exists_conflict(&param("Chess Club", "chess@x.com", "k3")).await?);

    Ok(())
}

/// Tests creating a club and finding it by its key.
///
/// Expected: Ok with the club found by secret key
#[tokio::test]
async fn creates_and_finds_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClubRepository::new(db);
    let club = repo
        .create(param("Chess Club", "chess@example.com", "chess-key"))
        .await?;

    let found = repo.find_by_secret_key("chess-key").await?;

    assert_eq!(found.map(|c| c.id), Some(club.id));
    assert!(repo.find_by_secret_key("wrong").await?.is_none());

    Ok(())
}
