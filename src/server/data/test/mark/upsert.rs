use super::*;

fn param(course_id: i32, category: MarkCategory, deadline_id: &str, obtained: f64) -> UpsertMarkParam {
    UpsertMarkParam {
        course_id,
        category,
        deadline_id: deadline_id.to_string(),
        obtained,
        out_of: 10.0,
    }
}

/// Tests re-submitting a mark for the same deadline and category.
///
/// Expected: Ok with a single mark holding the latest score
#[tokio::test]
async fn replaces_existing_score() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, _) = factory::create_enrolled_user(db).await?;

    let repo = MarkRepository::new(db);
    repo.upsert(user.id, &param(course.id, MarkCategory::Quiz, "d1", 6.0), Utc::now())
        .await?;
    repo.upsert(user.id, &param(course.id, MarkCategory::Quiz, "d1", 9.0), Utc::now())
        .await?;

    let marks = repo.get_for_course(user.id, course.id).await?;
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].obtained, 9.0);

    Ok(())
}

/// Tests that categories are kept apart for the same deadline.
///
/// Expected: Ok with one quiz and one mid mark
#[tokio::test]
async fn keeps_categories_separate() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_deadline_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, course, _) = factory::create_enrolled_user(db).await?;

    let repo = MarkRepository::new(db);
    repo.upsert(user.id, &param(course.id, MarkCategory::Quiz, "d1", 6.0), Utc::now())
        .await?;
    repo.upsert(user.id, &param(course.id, MarkCategory::Mid, "d1", 25.0), Utc::now())
        .await?;

    let marks = repo.get_for_course(user.id, course.id).await?;
    let mut categories: Vec<MarkCategory> = marks.iter().map(|m| m.category).collect();
    categories.sort_by_key(|c| c.as_str());
    assert_eq!(categories, vec![MarkCategory::Mid, MarkCategory::Quiz]);

    Ok(())
}
