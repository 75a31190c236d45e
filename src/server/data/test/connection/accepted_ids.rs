use super::*;

/// Tests listing accepted connections from both edge directions.
///
/// Expected: Ok with the two accepted peers and without the pending one
#[tokio::test]
async fn lists_accepted_peers_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_connection_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::create_user(db).await?;
    let sent_by_me = factory::create_user(db).await?;
    let sent_to_me = factory::create_user(db).await?;
    let pending = factory::create_user(db).await?;
    factory::connect(db, me.id, sent_by_me.id).await?;
    factory::connect(db, sent_to_me.id, me.id).await?;
    factory::create_connection(db, pending.id, me.id, "pending").await?;

    let ids = ConnectionRepository::new(db).accepted_ids(me.id).await?;

    let mut expected = vec![sent_by_me.id, sent_to_me.id];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    Ok(())
}
