use super::*;

/// Tests that past deadlines are left out and the rest sorted by due date.
///
/// Expected: Ok with the two future deadlines, soonest first
#[tokio::test]
async fn excludes_past_and_sorts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, section) = factory::create_enrolled_user(db).await?;
    let now = Utc::now();
    let later = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .last_date(now + Duration::days(5))
        .build()
        .await?;
    let sooner = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .last_date(now + Duration::days(1))
        .build()
        .await?;
    factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .last_date(now - Duration::days(1))
        .build()
        .await?;

    let deadlines = DeadlineRepository::new(db)
        .get_upcoming(course.id, &section.name, None, now)
        .await?;

    let ids: Vec<&str> = deadlines.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec![sooner.id.as_str(), later.id.as_str()]);

    Ok(())
}

/// Tests the theory/lab filter.
///
/// Expected: Ok with the lab deadline only
#[tokio::test]
async fn filters_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, section) = factory::create_enrolled_user(db).await?;
    factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .build()
        .await?;
    let lab = factory::deadline::DeadlineFactory::new(db, course.id, &section.name, user.id)
        .kind("lab")
        .build()
        .await?;

    let deadlines = DeadlineRepository::new(db)
        .get_upcoming(course.id, &section.name, Some(ClassKind::Lab), Utc::now())
        .await?;

    assert_eq!(deadlines.len(), 1);
    assert_eq!(deadlines[0].id, lab.id);

    Ok(())
}
