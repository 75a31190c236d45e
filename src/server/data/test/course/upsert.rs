use super::*;

fn schedule() -> ClassSchedule {
    ClassSchedule {
        faculty: "ABC".to_string(),
        details: String::new(),
        days: vec!["Sunday".to_string(), "Tuesday".to_string()],
        start_time: "08:00".to_string(),
        end_time: "09:20".to_string(),
    }
}

fn param(sections: Vec<Section>) -> UpsertCourseParam {
    UpsertCourseParam {
        course_code: "PHY111".to_string(),
        course_name: "Data Structures".to_string(),
        link: None,
        exam_day: None,
        sections,
    }
}

/// Tests creating a course with a lab section.
///
/// Expected: Ok with the section, both schedules and the day list restored
#[tokio::test]
async fn creates_course_with_sections() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = CourseRepository::new(db)
        .upsert(param(vec![Section {
            name: "1".to_string(),
            theory: Some(schedule()),
            lab: Some(schedule()),
        }]))
        .await?;

    assert_eq!(course.course_code, "PHY111");
    assert_eq!(course.sections.len(), 1);
    assert!(course.has_lab());
    assert_eq!(
        course.sections[0].theory.as_ref().unwrap().days,
        vec!["Sunday", "Tuesday"]
    );

    Ok(())
}

/// Tests upserting an existing code inside a transaction.
///
/// Verifies that the old sections are replaced wholesale and the course keeps its id.
///
/// Expected: Ok with only the new sections
#[tokio::test]
async fn replaces_sections_of_existing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = CourseRepository::new(db)
        .upsert(param(vec![Section {
            name: "1".to_string(),
            theory: Some(schedule()),
            lab: Some(schedule()),
        }]))
        .await?;

    let txn = db.begin().await?;
    let second = CourseRepository::new(&txn)
        .upsert(param(vec![
            Section {
                name: "2".to_string(),
                theory: Some(schedule()),
                lab: None,
            },
            Section {
                name: "3".to_string(),
                theory: Some(schedule()),
                lab: None,
            },
        ]))
        .await?;
    txn.commit().await?;

    assert_eq!(first.id, second.id);
    let names: Vec<&str> = second.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["2", "3"]);
    assert!(!second.has_lab());

    let reloaded = CourseRepository::new(db).find_by_id(first.id).await?.unwrap();
    assert_eq!(reloaded.sections.len(), 2);

    Ok(())
}

/// Tests that other courses are untouched by an upsert.
///
/// Expected: Ok with the unrelated course still holding its section
#[tokio::test]
async fn leaves_other_courses_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_course_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (other, _) = factory::create_course_with_section(db).await?;

    CourseRepository::new(db).upsert(param(Vec::new())).await?;

    let reloaded = CourseRepository::new(db).find_by_id(other.id).await?.unwrap();
    assert_eq!(reloaded.sections.len(), 1);

    Ok(())
}
