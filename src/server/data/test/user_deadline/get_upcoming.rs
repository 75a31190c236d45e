use super::*;

/// Tests the ordering of a user's deadline list.
///
/// Verifies that incomplete copies come before completed ones and that each group is
/// sorted by due date.
///
/// Expected: Ok with [incomplete soon, incomplete later, completed soonest]
#[tokio::test]
async fn lists_incomplete_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, section) = factory::create_enrolled_user(db).await?;
    let now = Utc::now();

    let mut ids = Vec::new();
    for days in [1, 3, 5] {
        let deadline = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
            .last_date(now + Duration::days(days))
            .build()
            .await?;
        factory::deadline::create_user_copy(db, user.id, &deadline, &course).await?;
        ids.push(deadline.id);
    }

    let repo = UserDeadlineRepository::new(db);
    repo.set_completed(user.id, &ids[0], true, now).await?;

    let list = repo.get_upcoming(user.id, now).await?;
    let order: Vec<&str> = list.iter().map(|d| d.deadline_id.as_str()).collect();

    assert_eq!(order, vec![ids[1].as_str(), ids[2].as_str(), ids[0].as_str()]);

    Ok(())
}
