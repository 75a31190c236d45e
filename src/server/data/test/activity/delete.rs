use super::*;

/// Tests that only the owner can delete an entry.
///
/// Expected: Ok(false) for another user, then Ok(true) for the owner
#[tokio::test]
async fn deletes_own_entry_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = ActivityRepository::new(db);
    let entry = repo
        .create(
            owner.id,
            NewActivity::new(ActivityAction::ProfileUpdated, "Profile"),
            Utc::now(),
        )
        .await?;

    assert!(!repo.delete(entry.id, other.id).await?);
    assert!(repo.delete(entry.id, owner.id).await?);

    let (entries, _) = repo
        .get_paginated(owner.id, &ActivityFilter::default(), 1, 20)
        .await?;
    assert!(entries.is_empty());

    Ok(())
}
