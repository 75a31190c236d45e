use super::*;

/// Tests per-action counts, largest first.
///
/// Expected: Ok with [("deadline_created", 2), ("review_posted", 1)]
#[tokio::test]
async fn counts_actions_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = ActivityRepository::new(db);
    for action in [
        ActivityAction::ReviewPosted,
        ActivityAction::DeadlineCreated,
        ActivityAction::DeadlineCreated,
    ] {
        repo.create(user.id, NewActivity::new(action, "entry"), Utc::now())
            .await?;
    }

    let counts = repo.count_by_action(user.id).await?;

    assert_eq!(
        counts,
        vec![
            ("deadline_created".to_string(), 2),
            ("review_posted".to_string(), 1)
        ]
    );

    Ok(())
}
