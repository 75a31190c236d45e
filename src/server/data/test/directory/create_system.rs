use super::*;
use crate::server::model::course::ClassKind;

/// Tests creating a system directory with a lab subdirectory.
///
/// Expected: Ok with an ownerless public main directory and a `Lab` child
#[tokio::test]
async fn creates_main_and_subdirectory() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DirectoryRepository::new(db);
    let (main, main_created) = repo
        .create_system("cse110", "Programming Language I", None, Utc::now())
        .await?;
    let (lab, lab_created) = repo
        .create_system(
            "cse110",
            "Programming Language I",
            Some((main.id, ClassKind::Lab)),
            Utc::now(),
        )
        .await?;

    assert!(main_created);
    assert!(lab_created);
    assert_eq!(main.course_code, "CSE110");
    assert_eq!(main.owner_id, None);
    assert_eq!(main.visibility, Visibility::Public);
    assert_eq!(lab.title, "Lab");
    assert_eq!(lab.parent_id, Some(main.id));
    assert_eq!(lab.subdirectory_kind, Some(ClassKind::Lab));

    let children = repo.get_subdirectories(main.id).await?;
    assert_eq!(children.len(), 1);
    assert_eq!(repo.get_system().await?.len(), 2);

    Ok(())
}

/// Tests that creating the same system directory twice keeps a single row.
///
/// Expected: the second call reports no insert and returns the first row
#[tokio::test]
async fn reuses_existing_system_directory() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_resource_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DirectoryRepository::new(db);
    let (first, _) = repo
        .create_system("CSE110", "Programming Language I", None, Utc::now())
        .await?;
    let (second, inserted) = repo
        .create_system("cse110", "Programming Language I", None, Utc::now())
        .await?;
    let (theory, _) = repo
        .create_system("CSE110", "", Some((first.id, ClassKind::Theory)), Utc::now())
        .await?;
    let (theory_again, theory_inserted) = repo
        .create_system("CSE110", "", Some((first.id, ClassKind::Theory)), Utc::now())
        .await?;

    assert!(!inserted);
    assert_eq!(second.id, first.id);
    assert!(!theory_inserted);
    assert_eq!(theory_again.id, theory.id);
    assert_eq!(repo.get_system().await?.len(), 2);

    Ok(())
}
